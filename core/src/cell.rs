use serde::{Deserialize, Serialize};

use crate::{CellValue, LOCK_THRESHOLD};

/// State of a single grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    value: CellValue,
    locked: bool,
}

impl GridCell {
    pub const fn new(value: CellValue, locked: bool) -> Self {
        Self { value, locked }
    }

    pub const fn value(self) -> CellValue {
        self.value
    }

    pub const fn is_locked(self) -> bool {
        self.locked
    }

    pub const fn shade(self) -> CellShade {
        if self.locked {
            CellShade::Locked
        } else if self.value % 2 == 0 {
            CellShade::Even
        } else {
            CellShade::Odd
        }
    }

    /// Locked cells must have reached the threshold at some point.
    pub(crate) const fn is_consistent(self) -> bool {
        !self.locked || self.value >= LOCK_THRESHOLD
    }

    pub(crate) const fn with_value(self, value: CellValue) -> Self {
        Self { value, ..self }
    }

    pub(crate) const fn locked(self) -> Self {
        Self {
            locked: true,
            ..self
        }
    }
}

/// Presentation class of a cell. Front ends must render all three apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellShade {
    Even,
    Odd,
    Locked,
}

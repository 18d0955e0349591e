use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Totals shown next to the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    pub total_value: CellValue,
    pub locked_cells: CellCount,
}

impl GridStats {
    pub fn from_cells(cells: impl IntoIterator<Item = GridCell>) -> Self {
        cells.into_iter().fold(Self::default(), |stats, cell| Self {
            total_value: stats.total_value.saturating_add(cell.value()),
            locked_cells: stats.locked_cells + CellCount::from(cell.is_locked()),
        })
    }

    pub const fn all_locked(&self) -> bool {
        self.locked_cells == TOTAL_CELLS
    }
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} locked={}/{}",
            self.total_value, self.locked_cells, TOTAL_CELLS
        )
    }
}

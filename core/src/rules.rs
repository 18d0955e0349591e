use serde::{Deserialize, Serialize};

use crate::*;

/// A click that raises a cell to this value locks it.
pub const LOCK_THRESHOLD: CellValue = 15;

/// Neighbor effects triggered by the value a click produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RippleRule {
    /// Multiples of 3 take one from the right neighbor, floored at zero.
    Row,
    /// Multiples of 5 add two to the neighbor below.
    Column,
}

impl RippleRule {
    pub const ALL: [RippleRule; 2] = [RippleRule::Row, RippleRule::Column];

    pub const fn divisor(self) -> CellValue {
        match self {
            Self::Row => 3,
            Self::Column => 5,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::Row => Direction::Right,
            Self::Column => Direction::Below,
        }
    }

    pub const fn triggers_on(self, value: CellValue) -> bool {
        value % self.divisor() == 0
    }

    /// Value of the neighbor after this rule touches it.
    pub const fn apply(self, value: CellValue) -> CellValue {
        match self {
            Self::Row => value.saturating_sub(1),
            Self::Column => value.saturating_add(2),
        }
    }
}

pub const fn reaches_lock(value: CellValue) -> bool {
    value >= LOCK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_of_fifteen_trigger_both_rules() {
        for rule in RippleRule::ALL {
            assert!(rule.triggers_on(15));
            assert!(rule.triggers_on(30));
        }
        assert!(RippleRule::Row.triggers_on(9));
        assert!(!RippleRule::Column.triggers_on(9));
        assert!(RippleRule::Column.triggers_on(10));
        assert!(!RippleRule::Row.triggers_on(10));
    }

    #[test]
    fn row_rule_floors_at_zero() {
        assert_eq!(RippleRule::Row.apply(0), 0);
        assert_eq!(RippleRule::Row.apply(4), 3);
        assert_eq!(RippleRule::Column.apply(0), 2);
    }
}

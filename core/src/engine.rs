use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// A neighbor change caused by a click.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ripple {
    pub rule: RippleRule,
    pub coords: Coord2,
    pub before: CellValue,
    pub after: CellValue,
}

/// Result of one click: the new snapshot and what happened on the way there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub grid: Grid,
    pub outcome: ClickOutcome,
    pub ripples: SmallVec<[Ripple; 2]>,
}

impl Transition {
    fn ignored(grid: Grid) -> Self {
        Self {
            grid,
            outcome: ClickOutcome::Ignored,
            ripples: SmallVec::new(),
        }
    }
}

pub fn create_grid() -> Grid {
    Grid::new()
}

/// Same as [`create_grid`], for callers that start a new game over an old one.
pub fn reset_grid() -> Grid {
    create_grid()
}

/// Applies a click at `(row, col)` and returns the resulting grid, leaving `grid` untouched.
pub fn apply_click(grid: &Grid, row: Coord, col: Coord) -> Result<Grid> {
    grid.click((row, col)).map(|transition| transition.grid)
}

impl Grid {
    pub fn click(&self, coords: Coord2) -> Result<Transition> {
        let coords = Self::validate_coords(coords).inspect_err(|err| log::warn!("{err}"))?;
        let mut next = self.clone();
        let target = next.cell_at(coords);

        if target.is_locked() {
            log::debug!("{coords:?} is locked, click ignored");
            return Ok(Transition::ignored(next));
        }

        let value = target.value().saturating_add(1);
        let (clicked, outcome) = if reaches_lock(value) {
            (target.with_value(value).locked(), ClickOutcome::Locked)
        } else {
            (target.with_value(value), ClickOutcome::Incremented)
        };
        next.set(coords, clicked);
        log::debug!("{coords:?} -> {value} ({})", outcome.as_str());

        // ripples only look at the clicked value and never feed back into each other
        let ripples = RippleRule::ALL
            .into_iter()
            .filter(|rule| rule.triggers_on(value))
            .filter_map(|rule| next.ripple(rule, coords))
            .collect();

        Ok(Transition {
            grid: next,
            outcome,
            ripples,
        })
    }

    fn ripple(&mut self, rule: RippleRule, origin: Coord2) -> Option<Ripple> {
        let coords = rule.direction().neighbor(origin)?;
        let neighbor = self.cell_at(coords);
        if neighbor.is_locked() {
            log::trace!("{rule:?} ripple from {origin:?} blocked by locked {coords:?}");
            return None;
        }

        let before = neighbor.value();
        let after = rule.apply(before);
        self.set(coords, neighbor.with_value(after));
        log::trace!("{rule:?} ripple from {origin:?}: {coords:?} {before} -> {after}");

        Some(Ripple {
            rule,
            coords,
            before,
            after,
        })
    }
}

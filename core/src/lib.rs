#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use rules::*;
pub use session::*;
pub use stats::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod rules;
mod session;
mod stats;
mod types;

/// Immutable 3x3 snapshot of cell states, addressed by `(row, col)`.
///
/// Transitions never modify a grid in place, they return a new one, so any
/// snapshot a caller keeps around stays valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<GridCell>", into = "Array2<GridCell>")]
pub struct Grid {
    cells: Array2<GridCell>,
}

impl Grid {
    /// Fresh grid, every cell at zero and unlocked.
    pub fn new() -> Self {
        Self {
            cells: Array2::default(GRID_SHAPE.to_nd_index()),
        }
    }

    /// Restores a grid from raw cells, rejecting anything a sequence of clicks could not produce.
    pub fn from_cells(cells: Array2<GridCell>) -> Result<Self> {
        let grid = Self { cells };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = GRID_SHAPE;
        if self.cells.dim() != (usize::from(rows), usize::from(cols)) {
            return Err(GridError::InvalidGridShape);
        }

        match self.iter().find(|(_, cell)| !cell.is_consistent()) {
            Some(((row, col), _)) => Err(GridError::InconsistentLock { row, col }),
            None => Ok(()),
        }
    }

    pub fn validate_coords(coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            let (row, col) = coords;
            Err(GridError::InvalidCoordinate { row, col })
        }
    }

    /// Cell at `coords`. Panics when out of bounds, see [`Grid::get`].
    pub fn cell_at(&self, coords: Coord2) -> GridCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn get(&self, coords: Coord2) -> Option<GridCell> {
        in_bounds(coords).then(|| self.cell_at(coords))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, GridCell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn to_rows(&self) -> [[GridCell; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let mut rows = [[GridCell::default(); GRID_SIZE as usize]; GRID_SIZE as usize];
        for ((row, col), cell) in self.iter() {
            rows[usize::from(row)][usize::from(col)] = cell;
        }
        rows
    }

    pub fn stats(&self) -> GridStats {
        GridStats::from_cells(self.iter().map(|(_, cell)| cell))
    }

    pub fn is_pristine(&self) -> bool {
        self.iter().all(|(_, cell)| cell == GridCell::default())
    }

    pub(crate) fn set(&mut self, coords: Coord2, cell: GridCell) {
        self.cells[coords.to_nd_index()] = cell;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Grid {
    type Output = GridCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<GridCell>> for Grid {
    type Error = GridError;

    fn try_from(cells: Array2<GridCell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Array2<GridCell> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

/// What a click did to its target cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickOutcome {
    /// Target was already locked, nothing changed.
    Ignored,
    Incremented,
    /// Target was incremented and reached the lock threshold.
    Locked,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            Incremented => true,
            Locked => true,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ignored => "ignored",
            Self::Incremented => "incremented",
            Self::Locked => "locked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_three_by_three_and_pristine() {
        let grid = Grid::new();

        assert_eq!(grid.iter().count(), usize::from(TOTAL_CELLS));
        assert!(grid.is_pristine());
        assert_eq!(grid.get((2, 2)), Some(GridCell::default()));
        assert_eq!(grid.get((3, 0)), None);
    }

    #[test]
    fn from_cells_rejects_wrong_shape() {
        let cells = Array2::default([2, 3]);

        assert_eq!(Grid::from_cells(cells), Err(GridError::InvalidGridShape));
    }

    #[test]
    fn from_cells_rejects_early_lock() {
        let mut cells: Array2<GridCell> = Array2::default([3, 3]);
        cells[[1, 2]] = GridCell::new(4, true);

        assert_eq!(
            Grid::from_cells(cells),
            Err(GridError::InconsistentLock { row: 1, col: 2 })
        );
    }

    #[test]
    fn to_rows_is_row_major() {
        let mut grid = Grid::new();
        grid.set((0, 2), GridCell::new(7, false));
        grid.set((2, 0), GridCell::new(15, true));

        let rows = grid.to_rows();

        assert_eq!(rows[0][2].value(), 7);
        assert!(rows[2][0].is_locked());
        assert_eq!(grid[(0, 2)], rows[0][2]);
    }

    #[test]
    fn validate_coords_reports_offending_pair() {
        assert_eq!(Grid::validate_coords((2, 1)), Ok((2, 1)));
        assert_eq!(
            Grid::validate_coords((1, 3)),
            Err(GridError::InvalidCoordinate { row: 1, col: 3 })
        );
    }
}

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Cell value type. Values never go below zero.
pub type CellValue = u32;

/// Count type used for locked-cell counts and other per-grid tallies.
pub type CellCount = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Number of rows and columns of every grid.
pub const GRID_SIZE: Coord = 3;

/// Shape of every grid, `(rows, cols)`.
pub const GRID_SHAPE: Coord2 = (GRID_SIZE, GRID_SIZE);

/// Total number of cells in a grid.
pub const TOTAL_CELLS: CellCount = GRID_SIZE * GRID_SIZE;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((row, col): Coord2) -> bool {
    row < GRID_SIZE && col < GRID_SIZE
}

/// Neighbor directions a ripple can travel in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Below,
}

impl Direction {
    const fn delta(self) -> (u8, u8) {
        match self {
            Self::Right => (0, 1),
            Self::Below => (1, 0),
        }
    }

    /// Neighbor of `coords` in this direction, when it is still on the grid.
    pub fn neighbor(self, coords: Coord2) -> Option<Coord2> {
        let (row, col) = coords;
        let (d_row, d_col) = self.delta();
        let next = (row.checked_add(d_row)?, col.checked_add(d_col)?);
        in_bounds(next).then_some(next)
    }
}

use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid coordinates ({row}, {col}), expected values in 0..=2")]
    InvalidCoordinate { row: Coord, col: Coord },
    #[error("Grid shape is not 3x3")]
    InvalidGridShape,
    #[error("Cell ({row}, {col}) is locked below the lock threshold")]
    InconsistentLock { row: Coord, col: Coord },
}

pub type Result<T> = core::result::Result<T, GridError>;

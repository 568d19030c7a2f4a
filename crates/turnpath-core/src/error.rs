//! Error types for grid construction and lookups.

use thiserror::Error;

use crate::geom::Point;

/// Grid error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("point {0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has no rows")]
    Empty,
}

pub type Result<T> = std::result::Result<T, GridError>;

//! Error types for the search engine.
//!
//! An unreachable target is not an error; it is reported through the
//! returned value. Only structural and configuration problems end up here.

use thiserror::Error;
use turnpath_core::{GridError, Point};

/// Search error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("point {0} lies outside the search bounds")]
    OutOfBounds(Point),

    #[error("start position {0} is blocked")]
    BlockedStart(Point),

    #[error("turn penalty must be non-negative, got {0}")]
    InvalidTurnPenalty(i64),

    #[error("invalid direction set: {0}")]
    InvalidDirectionSet(String),

    #[error("path cost overflowed")]
    CostOverflow,

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, PathError>;

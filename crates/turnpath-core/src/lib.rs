//! **turnpath-core**: grid geometry and character grids.
//!
//! This crate provides the foundational types used by the *turnpath*
//! search engine: points and ranges, compass headings with their angular
//! distance, and an immutable copy-on-write character grid.

pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;

pub use direction::{Direction, DirectionSet};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;

use std::fmt;

use turnpath_core::{Direction, Point};

/// Accumulated path cost. Turn penalties grow quickly, so costs are 64-bit.
pub type Cost = u64;

/// A search node: a position together with the heading it was entered with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub dir: Direction,
}

impl State {
    /// Create a new state.
    #[inline]
    pub const fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// The state reached by one step in heading `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        Self::new(self.pos + dir.offset(), dir)
    }

    /// Same position, new heading.
    #[inline]
    pub const fn facing(self, dir: Direction) -> Self {
        Self::new(self.pos, dir)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.dir)
    }
}

/// A sequence of states from the start state to a goal state.
pub type Path = Vec<State>;

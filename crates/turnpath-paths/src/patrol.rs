//! Patrol walker: straight ahead, turn right at obstacles.

use std::collections::HashSet;

use log::debug;
use turnpath_core::Point;

use crate::error::{PathError, Result};
use crate::state::State;
use crate::terrain::{Overlay, Terrain};

/// How a patrol ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatrolOutcome {
    /// The walker stepped off the grid.
    Exits { visited: HashSet<Point> },
    /// The walker repeated a (position, heading) state and will loop forever.
    Cycles { visited: HashSet<Point> },
}

impl PatrolOutcome {
    /// Cells the walker stood on, including the start.
    pub fn visited(&self) -> &HashSet<Point> {
        match self {
            PatrolOutcome::Exits { visited } | PatrolOutcome::Cycles { visited } => visited,
        }
    }

    #[inline]
    pub fn is_cycle(&self) -> bool {
        matches!(self, PatrolOutcome::Cycles { .. })
    }
}

/// Walk from `start` until the walker leaves the bounds or revisits a
/// state.
///
/// Each step either moves one cell forward or, if that cell is blocked,
/// turns a quarter turn clockwise in place. The walk always terminates
/// because the state space is finite.
pub fn patrol<T: Terrain + ?Sized>(terrain: &T, start: State) -> Result<PatrolOutcome> {
    let bounds = terrain.bounds();
    if !bounds.contains(start.pos) {
        return Err(PathError::OutOfBounds(start.pos));
    }
    if terrain.is_blocked(start.pos) {
        return Err(PathError::BlockedStart(start.pos));
    }

    let mut seen: HashSet<State> = HashSet::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut state = start;

    loop {
        if !seen.insert(state) {
            return Ok(PatrolOutcome::Cycles { visited });
        }
        visited.insert(state.pos);

        let ahead = state.step(state.dir);
        if !bounds.contains(ahead.pos) {
            return Ok(PatrolOutcome::Exits { visited });
        }
        state = if terrain.is_blocked(ahead.pos) {
            state.facing(state.dir.turn_right())
        } else {
            ahead
        };
    }
}

/// Cells where one extra obstacle would trap the walker in a cycle.
///
/// Only cells on the unobstructed patrol route can change its course, so
/// those are the candidates; the start cell is excluded. Each candidate is
/// probed through a caller-owned [`Overlay`], leaving `terrain` untouched.
/// Returned in row-major order.
pub fn loop_obstructions<T: Terrain + ?Sized>(terrain: &T, start: State) -> Result<Vec<Point>> {
    let baseline = patrol(terrain, start)?;
    let mut candidates: Vec<Point> = baseline
        .visited()
        .iter()
        .copied()
        .filter(|&p| p != start.pos)
        .collect();
    candidates.sort();

    let mut overlay = Overlay::new(terrain);
    let mut found = Vec::new();
    for p in candidates {
        overlay.block(p);
        if patrol(&overlay, start)?.is_cycle() {
            found.push(p);
        }
        overlay.unblock(p);
    }

    debug!(
        "{} of {} patrol cells trap the walker",
        found.len(),
        baseline.visited().len().saturating_sub(1)
    );
    Ok(found)
}

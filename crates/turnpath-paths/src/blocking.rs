//! Disconnection search over an incrementally growing obstacle set.

use log::{debug, trace};
use turnpath_core::Point;

use crate::config::SearchConfig;
use crate::engine::min_cost;
use crate::error::{PathError, Result};
use crate::state::State;
use crate::terrain::{ObstacleSet, Terrain};

/// When, if ever, a sequence of new obstacles cuts the start off from the
/// target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disconnection {
    /// The target is unreachable before any obstacle is added.
    Initially,
    /// Adding `drops[index]` (at `point`) was the first to disconnect.
    After { index: usize, point: Point },
    /// The target stays reachable after every obstacle is added.
    Never,
}

/// Add `drops` to `obstacles` one at a time and report the first one after
/// which `target` can no longer be reached from `start`.
///
/// The state graph is rebuilt from scratch after every addition. An obstacle
/// landing on the start or target cell disconnects immediately. Fails if a
/// drop lies outside the obstacle set's bounds.
pub fn first_blocking(
    obstacles: &ObstacleSet,
    drops: &[Point],
    start: State,
    target: Point,
    config: &SearchConfig,
) -> Result<Disconnection> {
    if !obstacles.bounds().contains(target) {
        return Err(PathError::OutOfBounds(target));
    }
    if obstacles.is_blocked(start.pos)
        || obstacles.is_blocked(target)
        || min_cost(obstacles, start, target, config)?.is_none()
    {
        return Ok(Disconnection::Initially);
    }

    let mut current = obstacles.clone();
    for (index, &point) in drops.iter().enumerate() {
        if !current.insert(point)? {
            trace!("drop {index} at {point} already blocked");
            continue;
        }
        let cut = point == start.pos
            || point == target
            || min_cost(&current, start, target, config)?.is_none();
        if cut {
            debug!("drop {index} at {point} disconnects {} from {target}", start.pos);
            return Ok(Disconnection::After { index, point });
        }
        trace!("drop {index} at {point}: still connected");
    }
    Ok(Disconnection::Never)
}

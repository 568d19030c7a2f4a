//! Exhaustive reconstruction of optimal paths.

use log::debug;

use crate::solver::ShortestPaths;
use crate::state::{Path, State};

/// Enumerate every minimum-cost path from `start` to any of `goals`.
///
/// Walks predecessor lists backward from each goal, forking at every state
/// with several optimal predecessors. Uses an explicit stack, so long paths
/// cannot exhaust the call stack. Paths run start to goal and are returned
/// in sorted order.
///
/// The number of paths can grow exponentially on open, tie-heavy grids;
/// callers that only need a cost or a cell set on such inputs should avoid
/// materialising every path.
pub fn reconstruct(paths: &ShortestPaths, start: State, goals: &[State]) -> Vec<Path> {
    let mut complete = Vec::new();
    // Partial chains, goal first, growing toward the start.
    let mut stack: Vec<Vec<State>> = goals.iter().map(|&g| vec![g]).collect();

    while let Some(mut chain) = stack.pop() {
        let Some(&head) = chain.last() else {
            continue;
        };
        if head == start {
            chain.reverse();
            complete.push(chain);
            continue;
        }

        let Some((&last, rest)) = paths.predecessors(head).split_last() else {
            // Not reachable from `start`.
            continue;
        };
        for &pred in rest {
            let mut fork = chain.clone();
            fork.push(pred);
            stack.push(fork);
        }
        chain.push(last);
        stack.push(chain);
    }

    complete.sort();
    debug!("reconstructed {} optimal paths to {} goal states", complete.len(), goals.len());
    complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::graph::build;
    use crate::solver::shortest_paths;
    use crate::terrain::ObstacleSet;
    use turnpath_core::{Direction, Point, Range};

    fn solve(rows: i32, cols: i32, start: State, target: Point) -> Vec<Path> {
        let terrain = ObstacleSet::new(Range::with_size(rows, cols));
        let g = build(&terrain, start, &SearchConfig::default()).unwrap();
        let sp = shortest_paths(&g, start).unwrap();
        let (goals, _) = sp.goal_states(target);
        reconstruct(&sp, start, &goals)
    }

    #[test]
    fn two_by_two_has_two_paths() {
        let start = State::new(Point::new(0, 0), Direction::East);
        let paths = solve(2, 2, start, Point::new(1, 1));
        assert_eq!(paths.len(), 2);
        for p in &paths {
            assert_eq!(p.len(), 3);
            assert_eq!(p[0], start);
            assert_eq!(p[2].pos, Point::new(1, 1));
        }
    }

    #[test]
    fn staircase_paths_are_all_enumerated() {
        // Without a turn penalty every monotone staircase ties: C(4, 2) = 6
        // on a 3x3 grid.
        let start = State::new(Point::new(0, 0), Direction::East);
        let paths = solve(3, 3, start, Point::new(2, 2));
        assert_eq!(paths.len(), 6);
        let mut distinct = paths.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn start_as_goal_yields_trivial_path() {
        let start = State::new(Point::new(0, 0), Direction::East);
        let paths = solve(1, 1, start, Point::new(0, 0));
        assert_eq!(paths, vec![vec![start]]);
    }

    #[test]
    fn no_goals_no_paths() {
        let start = State::new(Point::new(0, 0), Direction::East);
        let terrain = ObstacleSet::new(Range::with_size(1, 2));
        let g = build(&terrain, start, &SearchConfig::default()).unwrap();
        let sp = shortest_paths(&g, start).unwrap();
        assert!(reconstruct(&sp, start, &[]).is_empty());
    }

    #[test]
    fn long_corridor_does_not_recurse() {
        let start = State::new(Point::new(0, 0), Direction::East);
        let paths = solve(1, 20_000, start, Point::new(0, 19_999));
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 20_000);
    }
}

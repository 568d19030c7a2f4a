//! One-call pipeline: build, solve, reconstruct.

use log::debug;
use turnpath_core::Point;

use crate::aggregate::Solution;
use crate::config::SearchConfig;
use crate::error::{PathError, Result};
use crate::graph::build;
use crate::reconstruct::reconstruct;
use crate::solver::{ShortestPaths, shortest_paths};
use crate::state::{Cost, State};
use crate::terrain::Terrain;

fn search<T: Terrain + ?Sized>(
    terrain: &T,
    start: State,
    target: Point,
    config: &SearchConfig,
) -> Result<ShortestPaths> {
    if !terrain.bounds().contains(target) {
        return Err(PathError::OutOfBounds(target));
    }
    let graph = build(terrain, start, config)?;
    shortest_paths(&graph, start)
}

/// Find the minimum cost from `start` to any heading at `target`, together
/// with every path achieving it.
///
/// All structures are built fresh for this call. An unreachable target
/// yields [`Solution::unreachable`], not an error.
pub fn solve<T: Terrain + ?Sized>(
    terrain: &T,
    start: State,
    target: Point,
    config: &SearchConfig,
) -> Result<Solution> {
    let sp = search(terrain, start, target, config)?;
    let (goals, cost) = sp.goal_states(target);
    let Some(cost) = cost else {
        debug!("{target} unreachable from {start} ({} states reached)", sp.reached());
        return Ok(Solution::unreachable());
    };
    let paths = reconstruct(&sp, start, &goals);
    debug!(
        "{target} reached from {start} at cost {cost} via {} goal states ({} states reached)",
        goals.len(),
        sp.reached()
    );
    Ok(Solution::new(Some(cost), paths))
}

/// Like [`solve`], but skips path reconstruction.
pub fn min_cost<T: Terrain + ?Sized>(
    terrain: &T,
    start: State,
    target: Point,
    config: &SearchConfig,
) -> Result<Option<Cost>> {
    let sp = search(terrain, start, target, config)?;
    Ok(sp.goal_states(target).1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Aggregate;
    use crate::terrain::{ObstacleSet, Walls};
    use turnpath_core::{Direction, DirectionSet, Grid, Range};

    const LABYRINTH: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    fn labyrinth() -> (Grid, State, Point) {
        let grid = Grid::parse(LABYRINTH).unwrap();
        let start = grid.find('S').unwrap();
        let end = grid.find('E').unwrap();
        (grid, State::new(start, Direction::East), end)
    }

    #[test]
    fn labyrinth_cost_and_tiles() {
        let (grid, start, end) = labyrinth();
        let walls = Walls::new(&grid);
        let sol = solve(&walls, start, end, &SearchConfig::labyrinth()).unwrap();
        assert_eq!(sol.min_cost(), Some(7036));
        assert_eq!(sol.reduce(Aggregate::DistinctCells), Some(45));
        assert_eq!(
            min_cost(&walls, start, end, &SearchConfig::labyrinth()).unwrap(),
            Some(7036)
        );
    }

    #[test]
    fn every_path_starts_at_start_and_ends_at_target() {
        let (grid, start, end) = labyrinth();
        let walls = Walls::new(&grid);
        let sol = solve(&walls, start, end, &SearchConfig::labyrinth()).unwrap();
        assert!(sol.path_count() >= 2);
        for p in sol.paths() {
            assert_eq!(p.first(), Some(&start));
            assert_eq!(p.last().map(|s| s.pos), Some(end));
        }
    }

    #[test]
    fn two_by_two_open_grid() {
        let terrain = ObstacleSet::new(Range::with_size(2, 2));
        let start = State::new(Point::new(0, 0), Direction::East);
        let sol = solve(&terrain, start, Point::new(1, 1), &SearchConfig::default()).unwrap();
        assert_eq!(sol.min_cost(), Some(2));
        assert_eq!(sol.path_count(), 2);
    }

    #[test]
    fn five_by_five_open_grid_costs_eight() {
        let terrain = ObstacleSet::new(Range::with_size(5, 5));
        let start = State::new(Point::new(0, 0), Direction::East);
        let cost = min_cost(&terrain, start, Point::new(4, 4), &SearchConfig::default()).unwrap();
        assert_eq!(cost, Some(8));
        let sol = solve(&terrain, start, Point::new(4, 4), &SearchConfig::default()).unwrap();
        assert_eq!(sol.path_count(), 70);
    }

    #[test]
    fn walled_off_target_is_unreachable() {
        let grid = Grid::parse("S.#.\n..#E\n..#.").unwrap();
        let walls = Walls::new(&grid);
        let start = State::new(Point::new(0, 0), Direction::East);
        let sol = solve(&walls, start, Point::new(1, 3), &SearchConfig::labyrinth()).unwrap();
        assert_eq!(sol, Solution::unreachable());
        assert_eq!(
            min_cost(&walls, start, Point::new(1, 3), &SearchConfig::labyrinth()).unwrap(),
            None
        );
    }

    #[test]
    fn target_outside_bounds_fails_fast() {
        let terrain = ObstacleSet::new(Range::with_size(2, 2));
        let start = State::new(Point::new(0, 0), Direction::East);
        let target = Point::new(2, 2);
        assert_eq!(
            solve(&terrain, start, target, &SearchConfig::default()).unwrap_err(),
            PathError::OutOfBounds(target)
        );
    }

    #[test]
    fn diagonal_moves_shorten_paths() {
        let terrain = ObstacleSet::new(Range::with_size(3, 3));
        let start = State::new(Point::new(0, 0), Direction::SouthEast);
        let cfg = SearchConfig::new(10, DirectionSet::Octile).unwrap();
        let sol = solve(&terrain, start, Point::new(2, 2), &cfg).unwrap();
        assert_eq!(sol.min_cost(), Some(2));
        assert_eq!(sol.path_count(), 1);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (grid, start, end) = labyrinth();
        let walls = Walls::new(&grid);
        let cfg = SearchConfig::labyrinth();
        let a = solve(&walls, start, end, &cfg).unwrap();
        let b = solve(&walls, start, end, &cfg).unwrap();
        assert_eq!(a, b);
    }
}

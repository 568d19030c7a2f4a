//! Subcommand bodies. Each takes the decoded input and returns the report
//! lines to print.

use log::{Level, debug, info, log_enabled};
use turnpath_core::{Direction, Point, Range};
use turnpath_paths::{
    Aggregate, Disconnection, ObstacleSet, SearchConfig, State, Walls, first_blocking,
    loop_obstructions, min_cost, patrol, render_path, solve,
};

use crate::error::{CliError, Result};
use crate::input::{Maze, PatrolMap};

/// Labyrinth: minimum cost, number of optimal paths, cells on any of them.
pub fn maze(maze: &Maze, config: &SearchConfig) -> Result<Vec<String>> {
    let walls = Walls::new(&maze.grid);
    let start = State::new(maze.start, Direction::East);
    info!(
        "maze {}x{}, {} from {} to {}",
        maze.grid.height(),
        maze.grid.width(),
        config.directions,
        maze.start,
        maze.end
    );

    let solution = solve(&walls, start, maze.end, config)?;
    let Some(cost) = solution.min_cost() else {
        return Ok(vec!["no path".to_string()]);
    };
    if log_enabled!(Level::Debug) {
        for (i, path) in solution.paths().iter().enumerate() {
            debug!("optimal path {}:\n{}", i + 1, render_path(walls.grid(), path)?);
        }
    }
    let cells = solution.reduce(Aggregate::DistinctCells).unwrap_or_default();
    Ok(vec![
        format!("cost: {cost}"),
        format!("paths: {}", solution.path_count()),
        format!("cells: {cells}"),
    ])
}

/// Falling obstacles on a `(size + 1)` square: cost after the first `take`
/// drops, then the first drop that cuts the corners apart.
pub fn drops(drops: &[Point], size: i32, take: usize, config: &SearchConfig) -> Result<Vec<String>> {
    let side = size
        .checked_add(1)
        .filter(|_| size >= 0)
        .ok_or(CliError::InvalidSize(size))?;
    let bounds = Range::with_size(side, side);
    let start = State::new(Point::ZERO, Direction::East);
    let target = Point::new(size, size);
    let take = take.min(drops.len());
    let (initial, rest) = drops.split_at(take);

    let obstacles = ObstacleSet::from_points(bounds, initial.iter().copied())?;
    debug!("{} obstacles placed, {} pending", obstacles.len(), rest.len());

    let mut report = Vec::with_capacity(2);
    report.push(match min_cost(&obstacles, start, target, config)? {
        Some(cost) => format!("cost: {cost}"),
        None => "cost: no path".to_string(),
    });
    report.push(match first_blocking(&obstacles, rest, start, target, config)? {
        Disconnection::Initially => "blocking: already blocked".to_string(),
        Disconnection::After { point, .. } => format!("blocking: {},{}", point.col, point.row),
        Disconnection::Never => "blocking: none".to_string(),
    });
    Ok(report)
}

/// Patrol: distinct cells walked, and single obstructions that cause a loop.
pub fn patrol_report(map: &PatrolMap) -> Result<Vec<String>> {
    let walls = Walls::new(&map.grid);
    let outcome = patrol(&walls, map.start)?;
    if outcome.is_cycle() {
        info!("walker is already trapped in a cycle");
    }
    let obstructions = loop_obstructions(&walls, map.start)?;
    Ok(vec![
        format!("visited: {}", outcome.visited().len()),
        format!("obstructions: {}", obstructions.len()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_drops, parse_maze, parse_patrol};

    const DROPS: &str = "5,4\n4,2\n4,5\n3,0\n2,1\n6,3\n2,4\n1,5\n0,6\n3,3\n2,6\n5,1\n1,2\n5,5\n2,5\n6,5\n1,4\n0,4\n6,4\n1,1\n6,1\n1,0\n0,5\n1,6\n2,0\n";

    #[test]
    fn drops_sample() {
        let drops_list = parse_drops(DROPS).unwrap();
        let report = drops(&drops_list, 6, 12, &SearchConfig::default()).unwrap();
        assert_eq!(report, vec!["cost: 22", "blocking: 6,1"]);
    }

    #[test]
    fn drops_size_out_of_range_is_rejected() {
        let one = [Point::new(0, 1)];
        let cfg = SearchConfig::default();
        assert!(matches!(
            drops(&one, i32::MAX, 0, &cfg),
            Err(CliError::InvalidSize(i32::MAX))
        ));
        assert!(matches!(drops(&one, -1, 0, &cfg), Err(CliError::InvalidSize(-1))));
    }

    #[test]
    fn drops_single_cell_square() {
        let report = drops(&[], 0, 0, &SearchConfig::default()).unwrap();
        assert_eq!(report, vec!["cost: 0", "blocking: none"]);
    }

    #[test]
    fn maze_reports_no_path() {
        let m = parse_maze("S#E").unwrap();
        let report = maze(&m, &SearchConfig::labyrinth()).unwrap();
        assert_eq!(report, vec!["no path"]);
    }

    #[test]
    fn maze_small_corridor() {
        let m = parse_maze("#####\n#S..#\n###E#\n#####").unwrap();
        let report = maze(&m, &SearchConfig::labyrinth()).unwrap();
        assert_eq!(report, vec!["cost: 1003", "paths: 1", "cells: 4"]);
    }

    #[test]
    fn patrol_small_room() {
        let map = parse_patrol("#...\n...#\n^...").unwrap();
        let report = patrol_report(&map).unwrap();
        assert_eq!(report[0], "visited: 5");
        assert_eq!(report[1], "obstructions: 0");
    }
}

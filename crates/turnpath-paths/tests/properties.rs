use proptest::prelude::*;
use turnpath_core::{Direction, DirectionSet, Point, Range};
use turnpath_paths::{
    ObstacleSet, SearchConfig, State, Terrain, build, min_cost, reconstruct, shortest_paths,
    solve,
};

/// Small grids (at most 5x5) with roughly a quarter of the cells blocked,
/// the origin always open, and a random target cell.
fn terrain() -> impl Strategy<Value = (ObstacleSet, Point)> {
    (1i32..=5, 1i32..=5)
        .prop_flat_map(|(rows, cols)| {
            let cells = (rows * cols) as usize;
            (
                Just(rows),
                Just(cols),
                prop::collection::vec(prop::bool::weighted(0.25), cells),
                0..cells,
            )
        })
        .prop_map(|(rows, cols, blocked, target)| {
            let bounds = Range::with_size(rows, cols);
            let points = bounds
                .iter()
                .zip(blocked)
                .filter(|&(p, b)| b && p != Point::ZERO)
                .map(|(p, _)| p);
            let set = ObstacleSet::from_points(bounds, points).unwrap();
            let target = Point::new(target as i32 / cols, target as i32 % cols);
            (set, target)
        })
}

/// A 4-way or 8-way configuration together with a start heading it allows.
fn config() -> impl Strategy<Value = (SearchConfig, Direction)> {
    (
        prop::sample::select(vec![0i64, 1, 3, 1000]),
        prop::sample::select(vec![DirectionSet::Cardinal, DirectionSet::Octile]),
    )
        .prop_flat_map(|(penalty, set)| {
            let cfg = SearchConfig::new(penalty, set).unwrap();
            (Just(cfg), prop::sample::select(set.directions().to_vec()))
        })
}

proptest! {
    #[test]
    fn start_state_costs_zero((terrain, _) in terrain(), (cfg, dir) in config()) {
        let start = State::new(Point::ZERO, dir);
        let graph = build(&terrain, start, &cfg).unwrap();
        let sp = shortest_paths(&graph, start).unwrap();
        prop_assert_eq!(sp.cost(start), Some(0));
        prop_assert!(sp.predecessors(start).is_empty());
    }

    #[test]
    fn paths_are_optimal_and_consistent(
        (terrain, target) in terrain(),
        (cfg, dir) in config()
    ) {
        let start = State::new(Point::ZERO, dir);
        let graph = build(&terrain, start, &cfg).unwrap();
        let sp = shortest_paths(&graph, start).unwrap();
        let (goals, cost) = sp.goal_states(target);
        let paths = reconstruct(&sp, start, &goals);

        prop_assert_eq!(cost.is_none(), paths.is_empty());
        for path in &paths {
            prop_assert_eq!(path.first().copied(), Some(start));
            prop_assert_eq!(path.last().map(|s| s.pos), Some(target));

            let mut total = 0;
            for pair in path.windows(2) {
                let w = graph.weight(pair[0], pair[1]);
                prop_assert!(w.is_some());
                total += w.unwrap_or_default();
                prop_assert_eq!(sp.cost(pair[1]), Some(total));
                prop_assert!(sp.cost(pair[0]) <= sp.cost(pair[1]));
                prop_assert!(terrain.is_open(pair[1].pos));
            }
            prop_assert_eq!(Some(total), cost);
        }

        let mut distinct = paths.clone();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), paths.len());
    }

    #[test]
    fn solving_is_idempotent((terrain, target) in terrain(), (cfg, dir) in config()) {
        let start = State::new(Point::ZERO, dir);
        let a = solve(&terrain, start, target, &cfg).unwrap();
        let b = solve(&terrain, start, target, &cfg).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn diagonals_never_cost_more_without_penalty(
        (terrain, target) in terrain(),
        dir in prop::sample::select(Direction::CARDINAL.to_vec())
    ) {
        // With a zero penalty every 4-way route is also an 8-way route.
        let start = State::new(Point::ZERO, dir);
        let four = SearchConfig::new(0, DirectionSet::Cardinal).unwrap();
        let eight = SearchConfig::new(0, DirectionSet::Octile).unwrap();
        let c4 = min_cost(&terrain, start, target, &four).unwrap();
        let c8 = min_cost(&terrain, start, target, &eight).unwrap();
        if let Some(c4) = c4 {
            prop_assert!(c8.is_some_and(|c8| c8 <= c4));
        }
    }
}

#[test]
fn symmetric_routes_tie() {
    // Two mirror-image corridors around a central block.
    let bounds = Range::with_size(3, 3);
    let terrain = ObstacleSet::from_points(bounds, [Point::new(1, 1)]).unwrap();
    let start = State::new(Point::new(1, 0), Direction::East);
    let cfg = SearchConfig::labyrinth();
    let sol = solve(&terrain, start, Point::new(1, 2), &cfg).unwrap();
    assert_eq!(sol.path_count(), 2);
    // Turn, straight, turn, straight, turn: 4 moves and 3 quarter turns.
    assert_eq!(sol.min_cost(), Some(4 + 3000));
}

#[test]
fn straight_moves_cost_one_each() {
    let terrain = ObstacleSet::new(Range::with_size(1, 4));
    let start = State::new(Point::ZERO, Direction::East);
    let sol = solve(&terrain, start, Point::new(0, 3), &SearchConfig::labyrinth()).unwrap();
    assert_eq!(sol.min_cost(), Some(3));
    assert_eq!(sol.path_count(), 1);
}

#[test]
fn diagonal_start_heading_on_octile_grid() {
    let terrain = ObstacleSet::new(Range::with_size(3, 3));
    let start = State::new(Point::ZERO, Direction::SouthEast);
    let cfg = SearchConfig::new(1000, DirectionSet::Octile).unwrap();
    let sol = solve(&terrain, start, Point::new(2, 2), &cfg).unwrap();
    assert_eq!(sol.min_cost(), Some(2));
    assert_eq!(sol.path_count(), 1);
}

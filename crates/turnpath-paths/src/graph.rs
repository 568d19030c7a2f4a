//! State-graph construction.

use std::collections::HashMap;

use log::debug;

use crate::config::SearchConfig;
use crate::error::{PathError, Result};
use crate::state::{Cost, State};
use crate::terrain::Terrain;

/// A weighted edge to a neighbouring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: State,
    pub weight: Cost,
}

/// Directed, weighted adjacency over every state reachable from a start
/// state.
///
/// Each reached state has exactly one outgoing edge per heading whose target
/// cell is open. States that cannot be reached are absent.
#[derive(Debug, Clone, Default)]
pub struct StateGraph {
    adjacency: HashMap<State, Vec<Edge>>,
    edge_count: usize,
}

impl StateGraph {
    /// Outgoing edges of `state`; empty if the state was never reached.
    #[inline]
    pub fn edges(&self, state: State) -> &[Edge] {
        self.adjacency.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: State, to: State) -> Option<Cost> {
        self.edges(from).iter().find(|e| e.to == to).map(|e| e.weight)
    }

    /// Whether `state` was reached during construction.
    #[inline]
    pub fn contains(&self, state: State) -> bool {
        self.adjacency.contains_key(&state)
    }

    /// Number of reached states.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Reached states in arbitrary order.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        self.adjacency.keys().copied()
    }
}

/// Explore every state reachable from `start` and record its outgoing edges.
///
/// Traversal is an iterative depth-first search. A state is marked visited
/// when popped, so neighbours are pushed unconditionally. Moving one cell
/// costs 1 plus `config.turn_penalty` per rotation step between the current
/// and the new heading.
///
/// Fails fast if `start` is out of bounds, blocked, or faces a heading that
/// is not part of the configured direction set.
pub fn build<T: Terrain + ?Sized>(
    terrain: &T,
    start: State,
    config: &SearchConfig,
) -> Result<StateGraph> {
    if !terrain.bounds().contains(start.pos) {
        return Err(PathError::OutOfBounds(start.pos));
    }
    if terrain.is_blocked(start.pos) {
        return Err(PathError::BlockedStart(start.pos));
    }
    config.validate_start(start)?;

    let dirs = config.directions.directions();
    let mut adjacency: HashMap<State, Vec<Edge>> = HashMap::new();
    let mut edge_count = 0;
    let mut stack = vec![start];

    while let Some(state) = stack.pop() {
        if adjacency.contains_key(&state) {
            continue;
        }

        let mut edges = Vec::with_capacity(dirs.len());
        for &d in dirs {
            let to = state.step(d);
            if !terrain.is_open(to.pos) {
                continue;
            }
            let weight = config.step_weight(state.dir, d)?;
            edges.push(Edge { to, weight });
            stack.push(to);
        }

        edge_count += edges.len();
        adjacency.insert(state, edges);
    }

    debug!(
        "built state graph from {}: {} states, {} edges",
        start,
        adjacency.len(),
        edge_count
    );

    Ok(StateGraph {
        adjacency,
        edge_count,
    })
}

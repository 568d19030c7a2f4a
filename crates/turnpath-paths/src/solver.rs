//! Tie-preserving Dijkstra over a [`StateGraph`].

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};
use turnpath_core::Point;

use crate::error::{PathError, Result};
use crate::graph::StateGraph;
use crate::state::{Cost, State};

/// Priority-queue entry, ordered so `BinaryHeap` (a max-heap) pops the
/// smallest cost first. Ties break on the state for deterministic order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct QueueEntry {
    cost: Cost,
    state: State,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum costs and every optimal predecessor of each reached state.
///
/// Immutable once computed, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: State,
    costs: HashMap<State, Cost>,
    predecessors: HashMap<State, Vec<State>>,
}

impl ShortestPaths {
    /// The state the search started from.
    #[inline]
    pub fn start(&self) -> State {
        self.start
    }

    /// Minimum cost of `state`, or `None` if it was never reached.
    #[inline]
    pub fn cost(&self, state: State) -> Option<Cost> {
        self.costs.get(&state).copied()
    }

    /// All immediate predecessors of `state` on some minimum-cost path.
    /// Empty for the start state and for unreached states.
    #[inline]
    pub fn predecessors(&self, state: State) -> &[State] {
        self.predecessors
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of reached states.
    #[inline]
    pub fn reached(&self) -> usize {
        self.costs.len()
    }

    /// Reached states with their minimum cost, in arbitrary order.
    pub fn costs(&self) -> impl Iterator<Item = (State, Cost)> + '_ {
        self.costs.iter().map(|(&s, &c)| (s, c))
    }

    /// Every state at `target` whose cost equals the minimum over all
    /// headings at that position, together with that minimum.
    ///
    /// Arriving from several headings at the same cost yields several goal
    /// states. Returns an empty list and `None` when `target` was not reached.
    pub fn goal_states(&self, target: Point) -> (Vec<State>, Option<Cost>) {
        let best = self
            .costs()
            .filter(|(s, _)| s.pos == target)
            .map(|(_, c)| c)
            .min();
        let Some(best) = best else {
            return (Vec::new(), None);
        };
        let mut goals: Vec<State> = self
            .costs()
            .filter(|&(s, c)| s.pos == target && c == best)
            .map(|(s, _)| s)
            .collect();
        goals.sort();
        (goals, Some(best))
    }
}

/// Run Dijkstra from `start`, keeping every predecessor that achieves a
/// state's minimum cost.
///
/// A strictly cheaper path replaces the predecessor list; an equally cheap
/// one is appended to it. Stale queue entries are skipped before their edges
/// are examined. Fails with [`PathError::CostOverflow`] if a path cost does
/// not fit in a [`Cost`].
pub fn shortest_paths(graph: &StateGraph, start: State) -> Result<ShortestPaths> {
    let mut costs: HashMap<State, Cost> = HashMap::new();
    let mut predecessors: HashMap<State, Vec<State>> = HashMap::new();
    let mut open = BinaryHeap::new();

    costs.insert(start, 0);
    open.push(QueueEntry {
        cost: 0,
        state: start,
    });

    let mut settled = 0usize;
    let mut stale = 0usize;

    while let Some(QueueEntry { cost, state }) = open.pop() {
        if costs.get(&state).is_some_and(|&best| cost > best) {
            stale += 1;
            continue;
        }
        settled += 1;

        for edge in graph.edges(state) {
            let tentative = cost
                .checked_add(edge.weight)
                .ok_or(PathError::CostOverflow)?;

            match costs.entry(edge.to) {
                Entry::Occupied(mut known) => match tentative.cmp(known.get()) {
                    Ordering::Less => {
                        known.insert(tentative);
                        predecessors.insert(edge.to, vec![state]);
                        open.push(QueueEntry {
                            cost: tentative,
                            state: edge.to,
                        });
                    }
                    Ordering::Equal => {
                        let preds = predecessors.entry(edge.to).or_default();
                        if !preds.contains(&state) {
                            preds.push(state);
                        }
                    }
                    Ordering::Greater => {}
                },
                Entry::Vacant(slot) => {
                    slot.insert(tentative);
                    predecessors.insert(edge.to, vec![state]);
                    open.push(QueueEntry {
                        cost: tentative,
                        state: edge.to,
                    });
                }
            }
        }
    }

    trace!("skipped {stale} stale queue entries");
    debug!("dijkstra from {start}: settled {settled} of {} states", costs.len());

    Ok(ShortestPaths {
        start,
        costs,
        predecessors,
    })
}

//! Reduction of an optimal path set to the answer a caller asks for.

use std::collections::HashSet;

use turnpath_core::Point;

use crate::state::{Cost, Path};

/// How to reduce a [`Solution`] to a single number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aggregate {
    /// The cost shared by every optimal path.
    MinCost,
    /// How many cells lie on at least one optimal path.
    DistinctCells,
}

/// The outcome of a search: the minimum cost and every path achieving it.
///
/// An unreachable target is a normal outcome with no cost and no paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    cost: Option<Cost>,
    paths: Vec<Path>,
}

impl Solution {
    /// A solution with the given minimum cost and optimal paths.
    pub fn new(cost: Option<Cost>, paths: Vec<Path>) -> Self {
        Self { cost, paths }
    }

    /// The "no path" outcome.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// The minimum cost, or `None` when the target is unreachable.
    #[inline]
    pub fn min_cost(&self) -> Option<Cost> {
        self.cost
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// All optimal paths, sorted.
    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[inline]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Union of every position on every optimal path.
    pub fn visited_cells(&self) -> HashSet<Point> {
        self.paths
            .iter()
            .flat_map(|path| path.iter().map(|s| s.pos))
            .collect()
    }

    /// Reduce to a single number, or `None` when the target is unreachable.
    pub fn reduce(&self, mode: Aggregate) -> Option<u64> {
        match mode {
            Aggregate::MinCost => self.cost,
            Aggregate::DistinctCells => self.cost.map(|_| self.visited_cells().len() as u64),
        }
    }
}

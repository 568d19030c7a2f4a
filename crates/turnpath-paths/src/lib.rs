//! Heading-aware shortest paths on 2D grids.
//!
//! The search space is the set of (position, heading) [`State`]s. Moving one
//! cell costs 1 plus a per-step turn penalty scaled by the angular distance
//! between the old and new heading. The solver keeps *every* optimal
//! predecessor of each state, so all minimum-cost paths can be enumerated,
//! not just one.
//!
//! - **Graph construction** from a start state ([`build`])
//! - **Tie-preserving Dijkstra** ([`shortest_paths`])
//! - **Exhaustive path reconstruction** ([`reconstruct`])
//! - **Aggregation** to a cost or a distinct-cell count ([`Solution`])
//! - **Rendering** of a path onto a grid copy ([`render_path`])
//! - **One-call pipeline** ([`solve`], [`min_cost`])
//! - **Disconnection search** over a growing obstacle set ([`first_blocking`])
//! - **Patrol simulation** with cycle detection ([`patrol`], [`loop_obstructions`])
//!
//! Every call builds its structures from scratch; nothing is cached between
//! queries.
//!
//! # Obstacle models
//!
//! | Type | Obstacles |
//! |---|---|
//! | [`Walls`] | wall symbol of a character grid |
//! | [`ObstacleSet`] | explicit point set with bounds |
//! | [`Overlay`] | caller-owned extra points over another [`Terrain`] |

mod aggregate;
mod blocking;
mod config;
mod engine;
mod error;
mod graph;
mod patrol;
mod reconstruct;
mod render;
mod solver;
mod state;
mod terrain;

pub use aggregate::{Aggregate, Solution};
pub use blocking::{Disconnection, first_blocking};
pub use config::{SearchConfig, direction_set};
pub use engine::{min_cost, solve};
pub use error::{PathError, Result};
pub use graph::{Edge, StateGraph, build};
pub use patrol::{PatrolOutcome, loop_obstructions, patrol};
pub use reconstruct::reconstruct;
pub use render::render_path;
pub use solver::{ShortestPaths, shortest_paths};
pub use state::{Cost, Path, State};
pub use terrain::{ObstacleSet, Overlay, Terrain, Walls};

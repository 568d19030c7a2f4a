use turnpath_core::{Direction, DirectionSet};

use crate::error::{PathError, Result};
use crate::state::{Cost, State};

/// Search parameters shared by graph construction and solving.
///
/// Construct with [`SearchConfig::new`] to validate caller-supplied values,
/// or start from [`Default`] (4-way, no turn penalty).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Penalty added per rotation step of the active direction set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub turn_penalty: Cost,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directions: DirectionSet,
}

impl SearchConfig {
    /// Penalty per quarter turn used by reindeer-style labyrinths.
    pub const LABYRINTH_TURN_PENALTY: Cost = 1000;

    /// Create a validated configuration.
    pub fn new(turn_penalty: i64, directions: DirectionSet) -> Result<Self> {
        let turn_penalty =
            Cost::try_from(turn_penalty).map_err(|_| PathError::InvalidTurnPenalty(turn_penalty))?;
        Ok(Self {
            turn_penalty,
            directions,
        })
    }

    /// 4-way movement with a 1000 penalty per quarter turn.
    pub fn labyrinth() -> Self {
        Self {
            turn_penalty: Self::LABYRINTH_TURN_PENALTY,
            directions: DirectionSet::Cardinal,
        }
    }

    /// Replace the direction set (builder).
    #[inline]
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    /// Check that a start state's heading belongs to the direction set.
    pub fn validate_start(&self, start: State) -> Result<()> {
        if self.directions.contains(start.dir) {
            Ok(())
        } else {
            Err(PathError::InvalidDirectionSet(format!(
                "start heading {} is not part of the {} set",
                start.dir, self.directions
            )))
        }
    }

    /// Weight of a single forward step that changes heading from `from` to
    /// `to`: one unit of movement plus the turn penalty for every rotation
    /// step between the two headings.
    pub fn step_weight(&self, from: Direction, to: Direction) -> Result<Cost> {
        let steps = Cost::from(self.directions.angular_distance(from, to));
        self.turn_penalty
            .checked_mul(steps)
            .and_then(|turn| turn.checked_add(1))
            .ok_or(PathError::CostOverflow)
    }
}

/// Resolve a direction set from its size, as given on a command line.
pub fn direction_set(count: usize) -> Result<DirectionSet> {
    DirectionSet::from_count(count).ok_or_else(|| {
        PathError::InvalidDirectionSet(format!("expected 4 or 8 directions, got {count}"))
    })
}

//! Match configuration.

use serde::{Deserialize, Serialize};

/// Smallest number of participants in a match.
pub const MIN_PLAYERS: usize = 2;

/// Largest number of participants in a match.
pub const MAX_PLAYERS: usize = 4;

/// Settings for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the match RNG (deck order, reshuffles, seating).
    pub seed: u64,

    /// Shuffle seating order once at game start.
    /// When false, seats follow the order participants were added.
    pub shuffle_seats: bool,

    /// Maximum number of full passes before the match is abandoned
    /// with `TurnLimitExceeded`.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shuffle_seats: true,
            max_turns: 1_000,
        }
    }
}

impl GameConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the match seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable seat shuffling.
    pub fn with_shuffle_seats(mut self, shuffle: bool) -> Self {
        self.shuffle_seats = shuffle;
        self
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

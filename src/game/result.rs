//! Outcome of a completed match.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Outcome of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Full passes played, the extra round included.
    pub turns: u32,

    /// Final score per participant name.
    pub scores: FxHashMap<String, i32>,

    /// Lowest score; ties go to the earliest seat.
    pub winner: String,
}

impl MatchResult {
    /// Score of a participant by name.
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<i32> {
        self.scores.get(name).copied()
    }

    /// `(turns, scores, winner)` for callers that aggregate raw tuples.
    #[must_use]
    pub fn into_parts(self) -> (u32, FxHashMap<String, i32>, String) {
        (self.turns, self.scores, self.winner)
    }
}

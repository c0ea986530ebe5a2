//! Random participant - makes uniformly random legal decisions.
//!
//! Useful as a baseline opponent and for exercising the engine with
//! arbitrary, yet reproducible, play.

use tracing::trace;

use super::participant::{DrawChoice, Participant, PlayChoice};
use super::table::Coord;
use crate::core::GameRng;
use crate::rules::{CardView, Status};

/// Participant that picks uniformly among legal decisions.
#[derive(Debug)]
pub struct RandomParticipant {
    name: String,
    rng: GameRng,
    last_result: Option<(bool, i32)>,
}

impl RandomParticipant {
    /// Create a random participant driven by `rng`.
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
            last_result: None,
        }
    }

    /// `(won, relative_score)` from the last completed match.
    #[must_use]
    pub fn last_result(&self) -> Option<(bool, i32)> {
        self.last_result
    }
}

impl Participant for RandomParticipant {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_initial_flips(&mut self, table: &[Vec<CardView>]) -> Vec<Coord> {
        table
            .iter()
            .enumerate()
            .map(|(r, row)| Coord::new(r + 1, self.rng.gen_range_usize(1..row.len() + 1)))
            .collect()
    }

    fn choose_draw(&mut self, status: &Status) -> DrawChoice {
        if status.played_top_card.is_none() || self.rng.gen_bool(0.5) {
            DrawChoice::FromDeck
        } else {
            DrawChoice::FromDiscard
        }
    }

    fn choose_play(&mut self, status: &Status) -> PlayChoice {
        let mut options = vec![PlayChoice::ToDiscard];
        for (r, row) in status.player.iter().enumerate() {
            for c in 0..row.len() {
                options.push(PlayChoice::Replace(Coord::new(r + 1, c + 1)));
            }
        }
        let choice = self
            .rng
            .choose(&options)
            .copied()
            .unwrap_or(PlayChoice::ToDiscard);
        trace!(participant = %self.name, ?choice, "random play");
        choice
    }

    fn notify_result(&mut self, won: bool, relative_score: i32) {
        self.last_result = Some((won, relative_score));
    }
}

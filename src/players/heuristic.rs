//! Rule-based participant working purely from the masked status.
//!
//! Face-down cards are estimated at [`HIDDEN_ESTIMATE`]. With probability
//! `randomness` each preference is skipped, which keeps play from being
//! fully predictable.
//!
//! ## Progress
//!
//! Preferences alone can stall: once every low card sits on a table, no hand
//! is good enough to place over a face-down card. After [`STALL_LIMIT`] own
//! turns without revealing a card, the next play goes over the first
//! face-down card regardless of value or randomness. Every table therefore
//! loses a face-down card at least every `STALL_LIMIT + 1` turns, and matches
//! between these participants always end.

use tracing::trace;

use super::participant::{DrawChoice, Participant, PlayChoice};
use super::table::Coord;
use crate::core::GameRng;
use crate::rules::{CardView, MaskedTable, Status};

/// Assumed value of a face-down card.
pub const HIDDEN_ESTIMATE: u8 = 6;

/// Hand values below this are worth placing over a face-down card.
const GOOD_HAND: u8 = 6;

/// Minimum gain for replacing a known card.
const MIN_GAIN: u8 = 2;

/// Own turns without a reveal before one is forced.
pub const STALL_LIMIT: u32 = 3;

fn estimate(view: &CardView) -> u8 {
    view.value().unwrap_or(HIDDEN_ESTIMATE)
}

/// Position that would complete a row of `value`, if exactly one card
/// in some row differs from it.
fn completing_slot(table: &MaskedTable, value: u8) -> Option<Coord> {
    table.iter().enumerate().find_map(|(r, row)| {
        if row.len() < 2 {
            return None;
        }
        let mut misses = row
            .iter()
            .enumerate()
            .filter(|(_, view)| view.value() != Some(value));
        match (misses.next(), misses.next()) {
            (Some((c, _)), None) => Some(Coord::new(r + 1, c + 1)),
            _ => None,
        }
    })
}

fn first_hidden(table: &MaskedTable) -> Option<Coord> {
    table.iter().enumerate().find_map(|(r, row)| {
        row.iter()
            .position(CardView::is_hidden)
            .map(|c| Coord::new(r + 1, c + 1))
    })
}

fn reveals(table: &MaskedTable, choice: PlayChoice) -> bool {
    let PlayChoice::Replace(coord) = choice else {
        return false;
    };
    let (Some(r), Some(c)) = (coord.row.checked_sub(1), coord.col.checked_sub(1)) else {
        return false;
    };
    table
        .get(r)
        .and_then(|row| row.get(c))
        .is_some_and(CardView::is_hidden)
}

/// Participant following simple value-minimizing rules.
#[derive(Debug)]
pub struct HeuristicParticipant {
    name: String,
    rng: GameRng,
    randomness: f64,
    stalled_turns: u32,
}

impl HeuristicParticipant {
    /// Default chance of ignoring a preference.
    pub const DEFAULT_RANDOMNESS: f64 = 0.05;

    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
            randomness: Self::DEFAULT_RANDOMNESS,
            stalled_turns: 0,
        }
    }

    /// Set the chance of ignoring a preference, clamped to `0.0..=1.0`.
    /// NaN means never.
    #[must_use]
    pub fn with_randomness(mut self, randomness: f64) -> Self {
        self.randomness = if randomness.is_nan() {
            0.0
        } else {
            randomness.clamp(0.0, 1.0)
        };
        self
    }

    fn follow(&mut self) -> bool {
        !self.rng.gen_bool(self.randomness)
    }

    fn preferred_play(&mut self, table: &MaskedTable, hand: u8) -> PlayChoice {
        if let Some(coord) = completing_slot(table, hand) {
            trace!(participant = %self.name, %coord, "completing row");
            return PlayChoice::Replace(coord);
        }

        for (r, row) in table.iter().enumerate() {
            for (c, view) in row.iter().enumerate() {
                let wanted = match view.value() {
                    None => hand < GOOD_HAND,
                    Some(value) => value >= hand + MIN_GAIN,
                };
                if wanted && self.follow() {
                    return PlayChoice::Replace(Coord::new(r + 1, c + 1));
                }
            }
        }

        PlayChoice::ToDiscard
    }
}

impl Participant for HeuristicParticipant {
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
        let Some(top) = status.played_top_card.and_then(|view| view.value()) else {
            return DrawChoice::FromDeck;
        };

        if completing_slot(&status.player, top).is_some() {
            return DrawChoice::FromDiscard;
        }

        let worst = status.player.iter().flatten().map(estimate).max();
        let better = worst.is_some_and(|worst| top < worst);
        // Take a better discard unless randomness says otherwise;
        // take a worse one only when randomness says so.
        if better == self.follow() {
            DrawChoice::FromDiscard
        } else {
            DrawChoice::FromDeck
        }
    }

    fn choose_play(&mut self, status: &Status) -> PlayChoice {
        let Some(hand) = status.hand_card.and_then(|view| view.value()) else {
            return PlayChoice::ToDiscard;
        };

        let mut choice = self.preferred_play(&status.player, hand);
        if !reveals(&status.player, choice) && self.stalled_turns >= STALL_LIMIT {
            if let Some(coord) = first_hidden(&status.player) {
                trace!(participant = %self.name, %coord, "forced reveal");
                choice = PlayChoice::Replace(coord);
            }
        }

        if reveals(&status.player, choice) {
            self.stalled_turns = 0;
        } else {
            self.stalled_turns += 1;
        }
        choice
    }

    fn notify_result(&mut self, won: bool, relative_score: i32) {
        self.stalled_turns = 0;
        trace!(participant = %self.name, won, relative_score, "match result");
    }
}

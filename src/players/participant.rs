//! The decision interface every participant implements.
//!
//! The engine owns all cards. A participant only ever sees masked views
//! ([`Status`] and [`CardView`] grids) and answers with plain choices.
//! Strategies are trusted collaborators: a choice the rules cannot apply
//! aborts the match with a contract violation instead of being retried.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::table::Coord;
use crate::error::Violation;
use crate::rules::{CardView, Status};

/// Where to take the turn's card from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawChoice {
    FromDeck,
    FromDiscard,
}

/// Parses the console tokens `d` (deck) and `p` (played pile).
impl FromStr for DrawChoice {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" => Ok(DrawChoice::FromDeck),
            "p" => Ok(DrawChoice::FromDiscard),
            _ => Err(Violation::UnrecognizedToken(s.to_string())),
        }
    }
}

/// What to do with the card in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayChoice {
    /// Put the hand card on the discard pile.
    ToDiscard,
    /// Swap the hand card with the table card at this coordinate.
    Replace(Coord),
}

/// Parses `p` (discard) or `row,col` (1-indexed placement).
impl FromStr for PlayChoice {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || Violation::UnrecognizedToken(s.to_string());

        let token = s.trim();
        if token.eq_ignore_ascii_case("p") {
            return Ok(PlayChoice::ToDiscard);
        }

        let (row, col) = token.split_once(',').ok_or_else(unrecognized)?;
        let row = row.trim().parse().map_err(|_| unrecognized())?;
        let col = col.trim().parse().map_err(|_| unrecognized())?;
        Ok(PlayChoice::Replace(Coord::new(row, col)))
    }
}

/// A seat at the table.
///
/// Implementations decide; the engine applies. Every method receives
/// masked information only.
pub trait Participant {
    /// Display name, stable for the participant's lifetime.
    fn name(&self) -> &str;

    /// Pick one card per row to turn face up before play starts.
    ///
    /// Must return exactly one 1-indexed coordinate for each row of `table`.
    fn choose_initial_flips(&mut self, table: &[Vec<CardView>]) -> Vec<Coord>;

    /// Choose the draw source for this turn.
    fn choose_draw(&mut self, status: &Status) -> DrawChoice;

    /// Choose what to do with `status.hand_card`.
    ///
    /// Coordinates address the participant's current table shape.
    fn choose_play(&mut self, status: &Status) -> PlayChoice;

    /// Told once when the match completes. `relative_score` is this
    /// participant's score minus the winner's.
    fn notify_result(&mut self, won: bool, relative_score: i32);
}

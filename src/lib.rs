//! # rust-golf
//!
//! An engine for the card game Golf: two to four participants each hold a
//! 3×3 grid of face-down cards and try to finish with the lowest total.
//!
//! ## Rules in Brief
//!
//! - Cards are valued 0 to 12 in four suits, 52 cards in all.
//! - Before play, each participant turns one card per row face up.
//! - On a turn, a participant draws from the deck or the discard pile, then
//!   discards the drawn card or swaps it with a card on their table.
//! - A fully visible row of equal values is removed from the table.
//! - Once any table is fully face up, every other participant gets at least
//!   one more turn, and the match ends at the end of a pass.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns the Cards**: Participants see masked `Status` views and
//!    answer with plain choices; the engine applies them.
//!
//! 2. **Reproducible**: All randomness flows from `GameConfig::seed` through
//!    `GameRng`, so a seed and a set of participants replay exactly.
//!
//! 3. **Steppable**: A match can run to completion with `Game::play_game` or
//!    advance one phase at a time for external drivers.
//!
//! ## Modules
//!
//! - `core`: Configuration and deterministic RNG
//! - `cards`: Cards, suits and the deck
//! - `players`: Tables, the `Participant` trait and reference strategies
//! - `rules`: Masking, row clearing and scoring
//! - `game`: Builder, turn state machine and match results
//! - `error`: Error types

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng};

pub use crate::cards::{Card, Deck, Suit};

pub use crate::players::{
    Coord, DrawChoice, HeuristicParticipant, Participant, PlayChoice, RandomParticipant, Table,
};

pub use crate::rules::{CardView, Status};

pub use crate::game::{Game, GameBuilder, MatchResult, Phase};

pub use crate::error::{GolfError, Result, Violation};

//! Card system: suits, cards and the shared deck.
//!
//! ## Key Types
//!
//! - `Suit`: The four suits, each with a display glyph
//! - `Card`: A unique card with an immutable value and a one-way visibility flag
//! - `Deck`: Draw pile and discard pile, with reshuffle on exhaustion

pub mod card;
pub mod deck;

pub use card::{Card, Suit};
pub use deck::Deck;

//! Cards and suits.
//!
//! A `Card` is a unique physical object: it is neither `Clone` nor `Copy`, so
//! it can only be moved between the deck and the tables. Its suit and value
//! are fixed at construction; visibility can only be switched on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GolfError, Result};
use crate::rules::CardView;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Glyph used in masked status tokens.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '\u{2664}',
            Suit::Hearts => '\u{2661}',
            Suit::Diamonds => '\u{2662}',
            Suit::Clubs => '\u{2667}',
        }
    }

    /// Inverse of [`Suit::glyph`].
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.glyph() == glyph)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card with a value in `0..=12` and a visibility flag.
/// Cards have no serde form; [`CardView`] is their only wire representation.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    value: u8,
    visible: bool,
}

impl Card {
    /// Highest card value.
    pub const MAX_VALUE: u8 = 12;

    /// Number of cards in a full set.
    pub const SET_SIZE: usize = 52;

    /// Create a face-down card.
    pub fn new(suit: Suit, value: u8) -> Result<Self> {
        if value > Self::MAX_VALUE {
            return Err(GolfError::InvalidCardValue(value));
        }
        Ok(Self {
            suit,
            value,
            visible: false,
        })
    }

    /// One card of every (suit, value) pair, all face down.
    #[must_use]
    pub fn full_set() -> Vec<Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| {
                (0..=Self::MAX_VALUE).map(move |value| Card {
                    suit,
                    value,
                    visible: false,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Turn the card face up. There is no way back.
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// Builder-style [`Card::reveal`].
    #[must_use]
    pub fn revealed(mut self) -> Self {
        self.reveal();
        self
    }

    /// The (suit, value) pair identifying this card within a set.
    #[must_use]
    pub fn identity(&self) -> (Suit, u8) {
        (self.suit, self.value)
    }

    /// What a participant is allowed to see of this card.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView::from(self)
    }
}

/// Formats as the masked token: `XX` when face down.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}

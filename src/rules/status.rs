//! Status projection: the masked view handed to participants.
//!
//! ## Masking
//!
//! Every card is reduced to a [`CardView`] before it leaves the engine:
//! `Hidden` for a face-down card, `Visible { suit, value }` otherwise. On the
//! wire a view is a string token, `XX` or the suit glyph followed by the value
//! (`♤10`), so a serialized [`Status`] carries no hidden values at all.
//!
//! ```
//! use rust_golf::cards::{Card, Suit};
//! use rust_golf::rules::CardView;
//!
//! let card = Card::new(Suit::Hearts, 7).unwrap();
//! assert_eq!(card.view().to_string(), "XX");
//!
//! let card = card.revealed();
//! let token = card.view().to_string();
//! assert_eq!(token.parse::<CardView>().unwrap().value(), Some(7));
//! ```

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, Deck, Suit};
use crate::error::Violation;
use crate::players::Table;

/// Token for a face-down card.
pub const HIDDEN_TOKEN: &str = "XX";

/// What a participant may know about one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardView {
    Hidden,
    Visible { suit: Suit, value: u8 },
}

impl CardView {
    /// The value, if visible.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        match self {
            CardView::Hidden => None,
            CardView::Visible { value, .. } => Some(*value),
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, CardView::Hidden)
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        if card.is_visible() {
            CardView::Visible {
                suit: card.suit(),
                value: card.value(),
            }
        } else {
            CardView::Hidden
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardView::Hidden => f.write_str(HIDDEN_TOKEN),
            CardView::Visible { suit, value } => write!(f, "{}{}", suit.glyph(), value),
        }
    }
}

impl FromStr for CardView {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == HIDDEN_TOKEN {
            return Ok(CardView::Hidden);
        }

        let unrecognized = || Violation::UnrecognizedToken(s.to_string());
        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_glyph).ok_or_else(unrecognized)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unrecognized());
        }
        let value: u8 = digits.parse().map_err(|_| unrecognized())?;
        if value > Card::MAX_VALUE {
            return Err(unrecognized());
        }
        Ok(CardView::Visible { suit, value })
    }
}

impl Serialize for CardView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CardView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

/// A table as seen through the mask.
pub type MaskedTable = Vec<Vec<CardView>>;

/// Everything a participant sees when making a decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The deciding participant's name.
    pub name: String,

    /// The deciding participant's own table.
    pub player: MaskedTable,

    /// Opponent tables, in seat order starting after the deciding participant.
    pub other_players: Vec<MaskedTable>,

    /// Top of the discard pile.
    ///
    /// `None` only right after the last discarded card was drawn, while that
    /// card is still in hand.
    pub played_top_card: Option<CardView>,

    /// The card drawn this turn, present while choosing a play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand_card: Option<CardView>,

    /// Cards left in the draw pile.
    pub draw_pile_len: usize,
}

/// Project raw engine state into a participant's masked status.
pub fn build_status<'a>(
    name: &str,
    own: &Table,
    opponents: impl IntoIterator<Item = &'a Table>,
    deck: &Deck,
    hand: Option<&Card>,
) -> Status {
    Status {
        name: name.to_string(),
        player: own.masked(),
        other_players: opponents.into_iter().map(Table::masked).collect(),
        played_top_card: deck.last_played_card().map(Card::view),
        hand_card: hand.map(Card::view),
        draw_pile_len: deck.draw_pile_len(),
    }
}

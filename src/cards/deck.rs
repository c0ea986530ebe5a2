//! The shared deck: a draw pile and a discard pile.
//!
//! ## Reshuffle
//!
//! When the draw pile runs out, every discarded card except the top one is
//! shuffled into a new draw pile. The top card stays behind as the seed of
//! the new discard pile, so the discard pile is never empty once play starts.

use std::collections::VecDeque;

use tracing::debug;

use super::card::Card;
use crate::core::GameRng;
use crate::error::{GolfError, Result};

/// Draw pile plus discard pile.
///
/// The front of the draw pile is drawn first; the back of the discard pile
/// is its top.
#[derive(Debug)]
pub struct Deck {
    draw_pile: VecDeque<Card>,
    discard_pile: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// A full shuffled set with an empty discard pile.
    pub fn new(mut rng: GameRng) -> Self {
        let mut cards = Card::full_set();
        rng.shuffle(&mut cards);
        Self {
            draw_pile: cards.into(),
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Build a deck from explicit piles.
    ///
    /// `draw[0]` is drawn first, `discard.last()` is the top of the discard
    /// pile. Discarded cards are turned face up. Used to set up specific
    /// positions.
    pub fn from_piles(draw: Vec<Card>, discard: Vec<Card>, rng: GameRng) -> Self {
        Self {
            draw_pile: draw.into(),
            discard_pile: discard.into_iter().map(Card::revealed).collect(),
            rng,
        }
    }

    /// Remove and return the front of the draw pile, reshuffling if needed.
    pub fn draw_from_deck(&mut self) -> Result<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle();
        }
        self.draw_pile.pop_front().ok_or(GolfError::DeckExhausted)
    }

    /// Seed the discard pile with one face-up card from the draw pile.
    pub fn deal_first_card(&mut self) -> Result<()> {
        let card = self.draw_from_deck()?;
        self.add_to_played(card);
        Ok(())
    }

    /// Remove and return the top of the discard pile.
    pub fn draw_from_played(&mut self) -> Result<Card> {
        self.discard_pile.pop().ok_or(GolfError::EmptyDiscard)
    }

    /// Put a card face up on the discard pile.
    pub fn add_to_played(&mut self, mut card: Card) {
        card.reveal();
        self.discard_pile.push(card);
    }

    /// Peek at the top of the discard pile.
    #[must_use]
    pub fn last_played_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Every card held by the deck, draw pile first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw_pile.iter().chain(self.discard_pile.iter())
    }

    fn reshuffle(&mut self) {
        let Some(top) = self.discard_pile.pop() else {
            return;
        };
        let mut cards = std::mem::take(&mut self.discard_pile);
        self.discard_pile.push(top);

        self.rng.shuffle(&mut cards);
        debug!(cards = cards.len(), "reshuffled discard pile into draw pile");
        self.draw_pile.extend(cards);
    }
}

//! Builder for fresh matches.
//!
//! `build` runs the whole setup in order: roster checks, seat shuffle,
//! shuffled deck, 3×3 deal, one initial flip per row for every participant,
//! then a single face-up card to seed the discard pile.

use tracing::debug;

use super::engine::{check_roster, Game};
use crate::cards::Deck;
use crate::core::{GameConfig, GameRng};
use crate::error::{GolfError, Result, Violation};
use crate::players::{Participant, Table};

/// Builder for a Golf match.
///
/// ```
/// use rust_golf::core::GameRng;
/// use rust_golf::game::GameBuilder;
/// use rust_golf::players::RandomParticipant;
///
/// let mut game = GameBuilder::new()
///     .seed(7)
///     .participant(RandomParticipant::new("Ann", GameRng::new(1)))
///     .participant(RandomParticipant::new("Bob", GameRng::new(2)))
///     .build()
///     .unwrap();
///
/// let result = game.play_game().unwrap();
/// assert!(result.scores.contains_key(&result.winner));
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    participants: Vec<Box<dyn Participant>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn shuffle_seats(mut self, shuffle: bool) -> Self {
        self.config.shuffle_seats = shuffle;
        self
    }

    #[must_use]
    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    /// Add a participant. Seats follow insertion order unless shuffled.
    #[must_use]
    pub fn participant(self, participant: impl Participant + 'static) -> Self {
        self.boxed_participant(Box::new(participant))
    }

    #[must_use]
    pub fn boxed_participant(mut self, participant: Box<dyn Participant>) -> Self {
        self.participants.push(participant);
        self
    }

    /// Set up the match, ready for the first draw.
    pub fn build(self) -> Result<Game> {
        let Self {
            config,
            mut participants,
        } = self;
        check_roster(participants.iter().map(|p| p.name()))?;

        let rng = GameRng::new(config.seed);
        if config.shuffle_seats {
            rng.for_context("seats").shuffle(&mut participants);
        }

        let mut deck = Deck::new(rng.for_context("deck"));
        let mut seats = Vec::with_capacity(participants.len());
        for mut participant in participants {
            let mut table = Table::deal(&mut deck)?;
            apply_initial_flips(participant.as_mut(), &mut table)?;
            seats.push((participant, table));
        }
        deck.deal_first_card()?;

        debug!(
            seed = config.seed,
            seats = ?seats.iter().map(|(p, _)| p.name()).collect::<Vec<_>>(),
            "match set up"
        );
        Game::from_parts(deck, seats, &config)
    }
}

/// Ask for and apply one face-up card per row.
fn apply_initial_flips(participant: &mut dyn Participant, table: &mut Table) -> Result<()> {
    let flips = participant.choose_initial_flips(&table.masked());
    let rows = table.row_count();
    let violation = |v: Violation| GolfError::violation(participant.name(), v);

    let mut seen = vec![false; rows];
    let names_each_row = flips.len() == rows
        && flips.iter().all(|flip| match flip.row.checked_sub(1) {
            Some(r) if r < rows && !seen[r] => {
                seen[r] = true;
                true
            }
            _ => false,
        });
    if !names_each_row {
        return Err(violation(Violation::InitialFlips { rows }));
    }

    for &flip in &flips {
        table.reveal(flip).map_err(&violation)?;
    }
    Ok(())
}

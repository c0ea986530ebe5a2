//! The match engine: turn state machine, termination and scoring.
//!
//! ## Turn Protocol
//!
//! Each participant's turn moves through three phases:
//!
//! 1. `AwaitingDraw`: the participant picks a source; the drawn card is
//!    turned face up and held in hand.
//! 2. `AwaitingPlay`: the participant discards the hand card or swaps it
//!    with a table card, which goes to the discard pile.
//! 3. `RowCleanup`: complete rows are removed, the end condition is checked
//!    and play moves to the next seat.
//!
//! One full pass over every seat is one turn.
//!
//! ## Termination
//!
//! The first time any table is entirely face up at the end of a turn, the
//! extra round begins and the triggering seat is recorded. The match ends at
//! the first pass boundary where every other seat has played at least once
//! since the trigger: the end of the same pass when seat 0 triggered, the end
//! of the following pass otherwise. Passes are never cut short.
//!
//! ## Driving a Match
//!
//! `play_game` runs a match to completion by asking each participant in turn.
//! Wrappers that make one decision per external step can instead call
//! `apply_draw`, `apply_play` and `finish_turn` directly, using `status_for`
//! to observe; the phase checks keep the ordering intact.

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::result::MatchResult;
use crate::cards::{Card, Deck, Suit};
use crate::core::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GolfError, Result, Violation};
use crate::players::{DrawChoice, Participant, PlayChoice, Table};
use crate::rules::{self, Status};

/// Where the match is in the turn protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingDraw { seat: usize },
    AwaitingPlay { seat: usize },
    RowCleanup { seat: usize },
    Finished,
    /// Halted by an error; no result is available.
    Aborted,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::AwaitingDraw { .. } => "AwaitingDraw",
            Phase::AwaitingPlay { .. } => "AwaitingPlay",
            Phase::RowCleanup { .. } => "RowCleanup",
            Phase::Finished => "Finished",
            Phase::Aborted => "Aborted",
        }
    }

    /// The seat acting in this phase.
    #[must_use]
    pub fn seat(self) -> Option<usize> {
        match self {
            Phase::AwaitingDraw { seat }
            | Phase::AwaitingPlay { seat }
            | Phase::RowCleanup { seat } => Some(seat),
            Phase::Finished | Phase::Aborted => None,
        }
    }
}

/// When the extra round was triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ExtraRound {
    seat: usize,
    turn: u32,
}

struct Seat {
    name: String,
    participant: Box<dyn Participant>,
    table: Table,
}

/// Check the roster size and name uniqueness.
pub(crate) fn check_roster<'a>(names: impl ExactSizeIterator<Item = &'a str>) -> Result<()> {
    let count = names.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(GolfError::InvalidPlayerCount(count));
    }

    let mut seen: Vec<&str> = Vec::with_capacity(count);
    for name in names {
        if seen.contains(&name) {
            return Err(GolfError::DuplicateName(name.to_string()));
        }
        seen.push(name);
    }
    Ok(())
}

/// A single Golf match.
pub struct Game {
    deck: Deck,
    seats: Vec<Seat>,
    phase: Phase,
    hand: Option<Card>,
    turn_counter: u32,
    extra_round: Option<ExtraRound>,
    max_turns: u32,
}

impl Game {
    /// Assemble a match from an explicit position.
    ///
    /// Seats play in the given order, starting with the first. No cards are
    /// dealt or flipped; use [`GameBuilder`](super::GameBuilder) for a fresh
    /// match.
    pub fn from_parts(
        deck: Deck,
        seats: Vec<(Box<dyn Participant>, Table)>,
        config: &GameConfig,
    ) -> Result<Self> {
        check_roster(seats.iter().map(|(p, _)| p.name()))?;

        let seats = seats
            .into_iter()
            .map(|(participant, table)| Seat {
                name: participant.name().to_string(),
                participant,
                table,
            })
            .collect();

        Ok(Self {
            deck,
            seats,
            phase: Phase::AwaitingDraw { seat: 0 },
            hand: None,
            turn_counter: 0,
            extra_round: None,
            max_turns: config.max_turns,
        })
    }

    // === Observation ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Full passes completed so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turn_counter
    }

    /// True once the extra round has begun. Never reset.
    #[must_use]
    pub fn is_extra_round(&self) -> bool {
        self.extra_round.is_some()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Participant names in seat order.
    pub fn seat_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.seats.iter().map(|s| s.name.as_str())
    }

    #[must_use]
    pub fn table(&self, seat: usize) -> Option<&Table> {
        self.seats.get(seat).map(|s| &s.table)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The card drawn this turn, while awaiting a play.
    #[must_use]
    pub fn hand(&self) -> Option<&Card> {
        self.hand.as_ref()
    }

    /// Masked status as seen from `seat`.
    ///
    /// The hand card is included only for the seat currently choosing a play.
    #[must_use]
    pub fn status_for(&self, seat: usize) -> Option<Status> {
        let own = self.seats.get(seat)?;
        let count = self.seats.len();
        let opponents = (1..count).map(|offset| &self.seats[(seat + offset) % count].table);
        let hand = match self.phase {
            Phase::AwaitingPlay { seat: acting } if acting == seat => self.hand.as_ref(),
            _ => None,
        };
        Some(rules::build_status(&own.name, &own.table, opponents, &self.deck, hand))
    }

    /// True when some participant has every remaining card face up.
    #[must_use]
    pub fn check_game_over(&self) -> bool {
        self.seats.iter().any(|s| s.table.all_visible())
    }

    /// Current score of a seat.
    #[must_use]
    pub fn player_score(&self, seat: usize) -> Option<i32> {
        self.seats.get(seat).map(|s| rules::table_score(&s.table))
    }

    /// Identity of every card in the match: piles, tables and hand.
    #[must_use]
    pub fn census(&self) -> Vec<(Suit, u8)> {
        self.deck
            .cards()
            .chain(self.seats.iter().flat_map(|s| s.table.cards()))
            .chain(self.hand.iter())
            .map(Card::identity)
            .collect()
    }

    /// The result of a finished match.
    pub fn result(&self) -> Result<MatchResult> {
        self.expect_phase(self.phase == Phase::Finished, "Finished")?;

        let scores: Vec<i32> = self.seats.iter().map(|s| rules::table_score(&s.table)).collect();
        let winner = rules::winning_index(&scores).ok_or(GolfError::InvalidPlayerCount(0))?;

        Ok(MatchResult {
            turns: self.turn_counter,
            scores: self
                .seats
                .iter()
                .zip(&scores)
                .map(|(s, &score)| (s.name.clone(), score))
                .collect::<FxHashMap<_, _>>(),
            winner: self.seats[winner].name.clone(),
        })
    }

    // === Stepping ===

    /// Resolve the draw for the acting seat.
    pub fn apply_draw(&mut self, choice: DrawChoice) -> Result<()> {
        let Phase::AwaitingDraw { seat } = self.phase else {
            return Err(self.mismatch("AwaitingDraw"));
        };

        let mut card = match choice {
            DrawChoice::FromDeck => self.deck.draw_from_deck(),
            DrawChoice::FromDiscard if self.deck.discard_pile_len() == 0 => {
                return Err(self.abort(seat, Violation::DrawFromEmptyDiscard));
            }
            DrawChoice::FromDiscard => self.deck.draw_from_played(),
        }
        .inspect_err(|_| self.phase = Phase::Aborted)?;
        card.reveal();

        debug!(seat, participant = %self.seats[seat].name, ?choice, card = %card, "draw");
        self.hand = Some(card);
        self.phase = Phase::AwaitingPlay { seat };
        Ok(())
    }

    /// Resolve the play of the hand card for the acting seat.
    pub fn apply_play(&mut self, choice: PlayChoice) -> Result<()> {
        let Phase::AwaitingPlay { seat } = self.phase else {
            return Err(self.mismatch("AwaitingPlay"));
        };

        if let PlayChoice::Replace(coord) = choice {
            if self.seats[seat].table.get(coord).is_none() {
                return Err(self.abort(
                    seat,
                    Violation::CoordinateOutOfRange {
                        row: coord.row,
                        col: coord.col,
                    },
                ));
            }
        }

        let Some(hand) = self.hand.take() else {
            return Err(self.mismatch("AwaitingPlay"));
        };

        let seat_state = &mut self.seats[seat];
        match choice {
            PlayChoice::ToDiscard => {
                debug!(seat, participant = %seat_state.name, card = %hand, "discard");
                self.deck.add_to_played(hand);
            }
            PlayChoice::Replace(coord) => {
                let displaced = seat_state
                    .table
                    .replace(coord, hand)
                    .map_err(|v| GolfError::violation(seat_state.name.clone(), v))?;
                debug!(
                    seat,
                    participant = %seat_state.name,
                    %coord,
                    displaced = displaced.value(),
                    "replace"
                );
                self.deck.add_to_played(displaced);
            }
        }

        self.phase = Phase::RowCleanup { seat };
        Ok(())
    }

    /// Clear complete rows, check the end condition and advance play.
    ///
    /// Returns the number of rows cleared.
    pub fn finish_turn(&mut self) -> Result<usize> {
        let Phase::RowCleanup { seat } = self.phase else {
            return Err(self.mismatch("RowCleanup"));
        };

        let seat_state = &mut self.seats[seat];
        let cleared = rules::clear_completed_rows(&mut seat_state.table);
        if cleared > 0 {
            debug!(seat, participant = %seat_state.name, cleared, "rows cleared");
        }

        if self.extra_round.is_none() && self.check_game_over() {
            info!(seat, turn = self.turn_counter, "extra round begins");
            self.extra_round = Some(ExtraRound {
                seat,
                turn: self.turn_counter,
            });
        }

        let next = seat + 1;
        if next < self.seats.len() {
            self.phase = Phase::AwaitingDraw { seat: next };
            return Ok(cleared);
        }

        self.turn_counter += 1;
        if self.extra_round_complete() {
            self.phase = Phase::Finished;
            info!(turns = self.turn_counter, "match finished");
        } else if self.turn_counter >= self.max_turns {
            self.phase = Phase::Aborted;
            warn!(turns = self.turn_counter, "turn limit reached");
            return Err(GolfError::TurnLimitExceeded(self.max_turns));
        } else {
            self.phase = Phase::AwaitingDraw { seat: 0 };
        }
        Ok(cleared)
    }

    /// Advance one phase, asking the acting participant when a decision is due.
    pub fn step(&mut self) -> Result<()> {
        match self.phase {
            Phase::AwaitingDraw { seat } => {
                let choice = self.decide(seat, |p, status| p.choose_draw(status))?;
                self.apply_draw(choice)
            }
            Phase::AwaitingPlay { seat } => {
                let choice = self.decide(seat, |p, status| p.choose_play(status))?;
                self.apply_play(choice)
            }
            Phase::RowCleanup { .. } => self.finish_turn().map(|_| ()),
            Phase::Finished | Phase::Aborted => Err(self.mismatch("a turn in progress")),
        }
    }

    /// Play one participant's full turn: draw, play, row cleanup.
    pub fn player_plays_turn(&mut self) -> Result<()> {
        if !matches!(self.phase, Phase::AwaitingDraw { .. }) {
            return Err(self.mismatch("AwaitingDraw"));
        }
        self.step()?;
        self.step()?;
        self.step()
    }

    /// Run the match to completion and tell every participant the outcome.
    pub fn play_game(&mut self) -> Result<MatchResult> {
        while !self.is_finished() {
            self.step()?;
        }

        let result = self.result()?;
        let best = result.score_of(&result.winner).unwrap_or_default();
        for seat in &mut self.seats {
            let score = rules::table_score(&seat.table);
            seat.participant
                .notify_result(seat.name == result.winner, score - best);
        }

        info!(turns = result.turns, winner = %result.winner, "match result");
        Ok(result)
    }

    // === Internals ===

    fn decide<T>(
        &mut self,
        seat: usize,
        ask: impl FnOnce(&mut dyn Participant, &Status) -> T,
    ) -> Result<T> {
        let status = self
            .status_for(seat)
            .ok_or_else(|| self.mismatch("a seated participant"))?;
        Ok(ask(self.seats[seat].participant.as_mut(), &status))
    }

    fn extra_round_complete(&self) -> bool {
        let Some(extra) = self.extra_round else {
            return false;
        };
        let passes_needed = if extra.seat == 0 { 1 } else { 2 };
        self.check_game_over() && self.turn_counter >= extra.turn + passes_needed
    }

    fn expect_phase(&self, ok: bool, expected: &'static str) -> Result<()> {
        if ok {
            Ok(())
        } else {
            Err(self.mismatch(expected))
        }
    }

    fn mismatch(&self, expected: &'static str) -> GolfError {
        GolfError::PhaseMismatch {
            expected,
            actual: self.phase.label(),
        }
    }

    fn abort(&mut self, seat: usize, violation: Violation) -> GolfError {
        let name = self.seats[seat].name.clone();
        warn!(seat, participant = %name, %violation, "contract violation, match halted");
        self.phase = Phase::Aborted;
        GolfError::violation(name, violation)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("seats", &self.seats.iter().map(|s| &s.name).collect::<Vec<_>>())
            .field("phase", &self.phase)
            .field("turn_counter", &self.turn_counter)
            .field("extra_round", &self.extra_round)
            .field("draw_pile", &self.deck.draw_pile_len())
            .field("discard_pile", &self.deck.discard_pile_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::players::Coord;
    use crate::rules::CardView;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Replays queued choices, then draws from the deck and discards.
    struct Scripted {
        name: String,
        draws: VecDeque<DrawChoice>,
        plays: VecDeque<PlayChoice>,
        outcome: Rc<Cell<Option<(bool, i32)>>>,
    }

    impl Scripted {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                draws: VecDeque::new(),
                plays: VecDeque::new(),
                outcome: Rc::new(Cell::new(None)),
            }
        }

        fn draws(mut self, draws: impl IntoIterator<Item = DrawChoice>) -> Self {
            self.draws.extend(draws);
            self
        }

        fn plays(mut self, plays: impl IntoIterator<Item = PlayChoice>) -> Self {
            self.plays.extend(plays);
            self
        }
    }

    impl Participant for Scripted {
        fn name(&self) -> &str {
            &self.name
        }

        fn choose_initial_flips(&mut self, table: &[Vec<CardView>]) -> Vec<Coord> {
            (1..=table.len()).map(|row| Coord::new(row, 1)).collect()
        }

        fn choose_draw(&mut self, _status: &Status) -> DrawChoice {
            self.draws.pop_front().unwrap_or(DrawChoice::FromDeck)
        }

        fn choose_play(&mut self, _status: &Status) -> PlayChoice {
            self.plays.pop_front().unwrap_or(PlayChoice::ToDiscard)
        }

        fn notify_result(&mut self, won: bool, relative_score: i32) {
            self.outcome.set(Some((won, relative_score)));
        }
    }

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, value).unwrap()
    }

    fn shown(suit: Suit, value: u8) -> Card {
        card(suit, value).revealed()
    }

    /// Draw pile of Diamonds 0..=9, discard pile holding Clubs 12.
    fn deck() -> Deck {
        let draw = (0..10).map(|v| card(Suit::Diamonds, v)).collect();
        Deck::from_piles(draw, vec![card(Suit::Clubs, 12)], GameRng::new(7))
    }

    fn hidden_table(suit: Suit) -> Table {
        Table::from_rows(vec![vec![card(suit, 4), card(suit, 5), card(suit, 6)]])
    }

    fn visible_table(suit: Suit) -> Table {
        Table::from_rows(vec![vec![shown(suit, 1), shown(suit, 2), shown(suit, 3)]])
    }

    fn game(seats: Vec<(Scripted, Table)>, config: &GameConfig) -> Game {
        let seats = seats
            .into_iter()
            .map(|(p, t)| (Box::new(p) as Box<dyn Participant>, t))
            .collect();
        Game::from_parts(deck(), seats, config).unwrap()
    }

    #[test]
    fn test_rejects_bad_rosters() {
        let one = vec![(Box::new(Scripted::new("A")) as Box<dyn Participant>, Table::default())];
        assert!(matches!(
            Game::from_parts(deck(), one, &GameConfig::default()),
            Err(GolfError::InvalidPlayerCount(1))
        ));

        let dup = vec![
            (Box::new(Scripted::new("A")) as Box<dyn Participant>, Table::default()),
            (Box::new(Scripted::new("A")) as Box<dyn Participant>, Table::default()),
        ];
        assert!(matches!(
            Game::from_parts(deck(), dup, &GameConfig::default()),
            Err(GolfError::DuplicateName(name)) if name == "A"
        ));
    }

    #[test]
    fn test_phases_of_one_turn() {
        let mut g = game(
            vec![
                (Scripted::new("A"), hidden_table(Suit::Spades)),
                (Scripted::new("B"), hidden_table(Suit::Hearts)),
            ],
            &GameConfig::default(),
        );

        assert_eq!(g.phase(), Phase::AwaitingDraw { seat: 0 });
        g.apply_draw(DrawChoice::FromDeck).unwrap();
        assert_eq!(g.phase(), Phase::AwaitingPlay { seat: 0 });
        assert!(g.hand().unwrap().is_visible());
        assert_eq!(g.hand().unwrap().identity(), (Suit::Diamonds, 0));

        g.apply_play(PlayChoice::ToDiscard).unwrap();
        assert_eq!(g.phase(), Phase::RowCleanup { seat: 0 });
        assert!(g.hand().is_none());
        assert_eq!(g.deck().last_played_card().unwrap().identity(), (Suit::Diamonds, 0));

        assert_eq!(g.finish_turn().unwrap(), 0);
        assert_eq!(g.phase(), Phase::AwaitingDraw { seat: 1 });
        assert_eq!(g.turns_played(), 0);
    }

    #[test]
    fn test_phase_mismatch_does_not_abort() {
        let mut g = game(
            vec![
                (Scripted::new("A"), hidden_table(Suit::Spades)),
                (Scripted::new("B"), hidden_table(Suit::Hearts)),
            ],
            &GameConfig::default(),
        );

        let err = g.apply_play(PlayChoice::ToDiscard).unwrap_err();
        assert_eq!(
            err,
            GolfError::PhaseMismatch {
                expected: "AwaitingPlay",
                actual: "AwaitingDraw"
            }
        );
        assert!(g.finish_turn().is_err());
        assert!(g.result().is_err());
        assert_eq!(g.phase(), Phase::AwaitingDraw { seat: 0 });
    }

    #[test]
    fn test_replace_reveals_and_discards_displaced() {
        let a = Scripted::new("A")
            .draws([DrawChoice::FromDiscard])
            .plays([PlayChoice::Replace(Coord::new(1, 2))]);
        let mut g = game(
            vec![(a, hidden_table(Suit::Spades)), (Scripted::new("B"), hidden_table(Suit::Hearts))],
            &GameConfig::default(),
        );

        g.player_plays_turn().unwrap();

        let table = g.table(0).unwrap();
        let placed = table.get(Coord::new(1, 2)).unwrap();
        assert_eq!(placed.identity(), (Suit::Clubs, 12));
        assert!(placed.is_visible());

        let top = g.deck().last_played_card().unwrap();
        assert_eq!(top.identity(), (Suit::Spades, 5));
        assert!(top.is_visible());
        assert_eq!(g.deck().discard_pile_len(), 1);
    }

    #[test]
    fn test_row_clear_ignores_suit() {
        let table = Table::from_rows(vec![
            vec![shown(Suit::Spades, 7), shown(Suit::Hearts, 7), card(Suit::Diamonds, 11)],
            vec![card(Suit::Spades, 1), card(Suit::Spades, 2), card(Suit::Spades, 3)],
        ]);
        let draw = vec![card(Suit::Hearts, 0)];
        let deck = Deck::from_piles(draw, vec![card(Suit::Clubs, 7)], GameRng::new(1));
        let a = Scripted::new("A")
            .draws([DrawChoice::FromDiscard])
            .plays([PlayChoice::Replace(Coord::new(1, 3))]);
        let seats = vec![
            (Box::new(a) as Box<dyn Participant>, table),
            (Box::new(Scripted::new("B")) as Box<dyn Participant>, hidden_table(Suit::Hearts)),
        ];
        let mut g = Game::from_parts(deck, seats, &GameConfig::default()).unwrap();

        g.step().unwrap();
        g.step().unwrap();
        assert_eq!(g.finish_turn().unwrap(), 1);

        let table = g.table(0).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(g.player_score(0), Some(6));
        assert_eq!(g.deck().last_played_card().unwrap().identity(), (Suit::Diamonds, 11));
        assert!(!g.is_extra_round());
    }

    #[test]
    fn test_first_seat_trigger_ends_same_pass() {
        let mut g = game(
            vec![
                (Scripted::new("A"), visible_table(Suit::Spades)),
                (Scripted::new("B"), hidden_table(Suit::Hearts)),
                (Scripted::new("C"), hidden_table(Suit::Clubs)),
            ],
            &GameConfig::default(),
        );

        g.player_plays_turn().unwrap();
        assert!(g.is_extra_round());
        g.player_plays_turn().unwrap();
        assert!(!g.is_finished());
        g.player_plays_turn().unwrap();

        assert!(g.is_finished());
        let result = g.result().unwrap();
        assert_eq!(result.turns, 1);
        assert_eq!(result.winner, "A");
        assert_eq!(result.score_of("A"), Some(6));
        assert_eq!(result.score_of("B"), Some(15));
    }

    #[test]
    fn test_later_seat_trigger_plays_one_more_pass() {
        let b_table = Table::from_rows(vec![vec![
            shown(Suit::Hearts, 1),
            shown(Suit::Hearts, 2),
            card(Suit::Hearts, 3),
        ]]);
        let b = Scripted::new("B").plays([PlayChoice::Replace(Coord::new(1, 3))]);
        let mut g = game(
            vec![(Scripted::new("A"), hidden_table(Suit::Spades)), (b, b_table)],
            &GameConfig::default(),
        );

        // Pass 0: A, then B triggers
        g.player_plays_turn().unwrap();
        assert!(!g.is_extra_round());
        g.player_plays_turn().unwrap();
        assert!(g.is_extra_round());
        assert_eq!(g.phase(), Phase::AwaitingDraw { seat: 0 });

        // Pass 1: A gets its extra turn, B closes the pass
        g.player_plays_turn().unwrap();
        g.player_plays_turn().unwrap();

        assert!(g.is_finished());
        assert_eq!(g.turns_played(), 2);
        assert!(g.step().is_err());
    }

    #[test]
    fn test_out_of_range_play_aborts() {
        let a = Scripted::new("A").plays([PlayChoice::Replace(Coord::new(2, 1))]);
        let mut g = game(
            vec![(a, hidden_table(Suit::Spades)), (Scripted::new("B"), hidden_table(Suit::Hearts))],
            &GameConfig::default(),
        );

        let err = g.player_plays_turn().unwrap_err();
        assert!(err.is_contract_violation());
        assert_eq!(
            err,
            GolfError::violation("A", Violation::CoordinateOutOfRange { row: 2, col: 1 })
        );
        assert_eq!(g.phase(), Phase::Aborted);
        assert!(matches!(g.step(), Err(GolfError::PhaseMismatch { .. })));
    }

    #[test]
    fn test_empty_discard_draw_aborts() {
        let a = Scripted::new("A").draws([DrawChoice::FromDiscard]);
        let seats = vec![
            (Box::new(a) as Box<dyn Participant>, hidden_table(Suit::Spades)),
            (Box::new(Scripted::new("B")) as Box<dyn Participant>, hidden_table(Suit::Hearts)),
        ];
        let deck = Deck::from_piles(vec![card(Suit::Hearts, 0)], Vec::new(), GameRng::new(1));
        let mut g = Game::from_parts(deck, seats, &GameConfig::default()).unwrap();

        let err = g.step().unwrap_err();
        assert_eq!(err, GolfError::violation("A", Violation::DrawFromEmptyDiscard));
        assert_eq!(g.phase(), Phase::Aborted);
    }

    #[test]
    fn test_turn_limit() {
        let config = GameConfig::default().with_max_turns(2);
        let mut g = game(
            vec![
                (Scripted::new("A"), hidden_table(Suit::Spades)),
                (Scripted::new("B"), hidden_table(Suit::Hearts)),
            ],
            &config,
        );

        let err = g.play_game().unwrap_err();
        assert_eq!(err, GolfError::TurnLimitExceeded(2));
        assert_eq!(g.turns_played(), 2);
        assert_eq!(g.phase(), Phase::Aborted);
    }

    #[test]
    fn test_status_masks_and_orders_opponents() {
        let mut g = game(
            vec![
                (Scripted::new("A"), visible_table(Suit::Spades)),
                (Scripted::new("B"), hidden_table(Suit::Hearts)),
                (Scripted::new("C"), hidden_table(Suit::Clubs)),
            ],
            &GameConfig::default(),
        );

        let status = g.status_for(1).unwrap();
        assert_eq!(status.name, "B");
        assert!(status.player.iter().flatten().all(CardView::is_hidden));
        // C then A
        assert_eq!(status.other_players.len(), 2);
        assert!(status.other_players[0].iter().flatten().all(CardView::is_hidden));
        assert_eq!(status.other_players[1][0][0].value(), Some(1));
        assert_eq!(status.played_top_card.and_then(|v| v.value()), Some(12));
        assert_eq!(status.draw_pile_len, 10);
        assert!(g.status_for(3).is_none());

        g.apply_draw(DrawChoice::FromDeck).unwrap();
        assert!(g.status_for(0).unwrap().hand_card.is_some());
        assert!(g.status_for(1).unwrap().hand_card.is_none());
    }

    #[test]
    fn test_census_is_preserved() {
        let mut g = game(
            vec![
                (Scripted::new("A"), hidden_table(Suit::Spades)),
                (Scripted::new("B"), hidden_table(Suit::Hearts)),
            ],
            &GameConfig::default().with_max_turns(50),
        );
        let mut before = g.census();
        before.sort();

        for _ in 0..30 {
            g.step().unwrap();
            let mut now = g.census();
            now.sort();
            assert_eq!(now, before);
        }
    }

    #[test]
    fn test_play_game_notifies_relative_scores() {
        let a = Scripted::new("A");
        let b = Scripted::new("B");
        let (a_seen, b_seen) = (Rc::clone(&a.outcome), Rc::clone(&b.outcome));
        let mut g = game(
            vec![(a, visible_table(Suit::Spades)), (b, hidden_table(Suit::Hearts))],
            &GameConfig::default(),
        );

        let result = g.play_game().unwrap();
        assert_eq!(result.winner, "A");
        assert_eq!(a_seen.get(), Some((true, 0)));
        assert_eq!(b_seen.get(), Some((false, 9)));
    }
}

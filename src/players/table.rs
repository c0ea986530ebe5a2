//! A participant's table: rows of cards that shrink as rows are cleared.
//!
//! ## Coordinates
//!
//! Participants address cards with 1-indexed `Coord`s into the table's
//! *current* shape. After a row is cleared, the rows below it move up and
//! their coordinates change with them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::cards::{Card, Deck};
use crate::error::{Result, Violation};
use crate::rules::CardView;

/// Rows dealt at the start of a match.
pub const ROWS: usize = 3;

/// Cards per dealt row.
pub const ROW_WIDTH: usize = 3;

/// One row of a table.
pub type Row = SmallVec<[Card; ROW_WIDTH]>;

/// 1-indexed table coordinate, as used by participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn out_of_range(self) -> Violation {
        Violation::CoordinateOutOfRange {
            row: self.row,
            col: self.col,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A participant's grid of cards.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from explicit rows.
    pub fn from_rows(rows: Vec<Vec<Card>>) -> Self {
        Self {
            rows: rows.into_iter().map(Row::from_vec).collect(),
        }
    }

    /// Deal a fresh face-down 3×3 table from the deck.
    pub fn deal(deck: &mut Deck) -> Result<Self> {
        let mut rows = Vec::with_capacity(ROWS);
        for _ in 0..ROWS {
            let mut row = Row::new();
            for _ in 0..ROW_WIDTH {
                row.push(deck.draw_from_deck()?);
            }
            rows.push(row);
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every card on the table, row by row.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.rows.iter().flatten()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// True when every remaining card is face up (vacuously true when empty).
    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.cards().all(Card::is_visible)
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Card> {
        let row = coord.row.checked_sub(1)?;
        let col = coord.col.checked_sub(1)?;
        self.rows.get(row)?.get(col)
    }

    /// Mutable access to the card at `coord`.
    pub fn slot_mut(&mut self, coord: Coord) -> std::result::Result<&mut Card, Violation> {
        let (Some(row), Some(col)) = (coord.row.checked_sub(1), coord.col.checked_sub(1)) else {
            return Err(coord.out_of_range());
        };
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| coord.out_of_range())
    }

    /// Turn the card at `coord` face up.
    pub fn reveal(&mut self, coord: Coord) -> std::result::Result<(), Violation> {
        self.slot_mut(coord)?.reveal();
        Ok(())
    }

    /// Put `card` at `coord` and return the card it displaced.
    pub fn replace(&mut self, coord: Coord, card: Card) -> std::result::Result<Card, Violation> {
        let slot = self.slot_mut(coord)?;
        Ok(std::mem::replace(slot, card))
    }

    /// Keep only rows matching the predicate. Surviving rows keep their order.
    pub fn retain_rows(&mut self, keep: impl FnMut(&Row) -> bool) {
        self.rows.retain(keep);
    }

    /// Masked view of the table, one token per card.
    #[must_use]
    pub fn masked(&self) -> Vec<Vec<CardView>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(Card::view).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::GameRng;

    fn card(value: u8) -> Card {
        Card::new(Suit::Clubs, value).unwrap()
    }

    fn grid() -> Table {
        Table::from_rows(vec![
            vec![card(1), card(2), card(3)],
            vec![card(4), card(5), card(6)],
            vec![card(7), card(8), card(9)],
        ])
    }

    #[test]
    fn test_deal() {
        let mut deck = Deck::new(GameRng::new(42));
        let table = Table::deal(&mut deck).unwrap();

        assert_eq!(table.row_count(), ROWS);
        assert!(table.rows().iter().all(|row| row.len() == ROW_WIDTH));
        assert_eq!(deck.draw_pile_len(), 52 - 9);
        assert!(table.cards().all(|c| !c.is_visible()));
    }

    #[test]
    fn test_coordinates_are_one_indexed() {
        let table = grid();
        assert_eq!(table.get(Coord::new(1, 1)).unwrap().value(), 1);
        assert_eq!(table.get(Coord::new(2, 3)).unwrap().value(), 6);
        assert!(table.get(Coord::new(0, 1)).is_none());
        assert!(table.get(Coord::new(4, 1)).is_none());
        assert!(table.get(Coord::new(1, 4)).is_none());
    }

    #[test]
    fn test_reveal() {
        let mut table = grid();
        table.reveal(Coord::new(3, 2)).unwrap();
        assert!(table.get(Coord::new(3, 2)).unwrap().is_visible());
        assert_eq!(
            table.reveal(Coord::new(3, 0)),
            Err(Violation::CoordinateOutOfRange { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_replace_returns_displaced_card() {
        let mut table = grid();
        let old = table.replace(Coord::new(2, 2), card(12).revealed()).unwrap();

        assert_eq!(old.value(), 5);
        assert_eq!(table.get(Coord::new(2, 2)).unwrap().value(), 12);
        assert_eq!(table.card_count(), 9);
    }

    #[test]
    fn test_coordinates_follow_current_shape() {
        let mut table = grid();
        table.retain_rows(|row| row[0].value() != 1);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(Coord::new(1, 1)).unwrap().value(), 4);
        assert!(table.get(Coord::new(3, 1)).is_none());
    }

    #[test]
    fn test_all_visible() {
        let mut table = grid();
        assert!(!table.all_visible());

        for row in 1..=3 {
            for col in 1..=3 {
                table.reveal(Coord::new(row, col)).unwrap();
            }
        }
        assert!(table.all_visible());
        assert!(Table::default().all_visible());
    }

    #[test]
    fn test_masked() {
        let mut table = grid();
        table.reveal(Coord::new(1, 2)).unwrap();

        let masked = table.masked();
        assert_eq!(masked[0][0], CardView::Hidden);
        assert_eq!(masked[0][1], CardView::Visible { suit: Suit::Clubs, value: 2 });
    }
}

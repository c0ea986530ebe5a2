//! Row clearing, scoring and winner selection.
//!
//! A row clears when every card in it is face up and all share one value.
//! Suits are ignored: three visible sevens clear regardless of suit. This is
//! the house rule of this variant and it shapes scoring strongly, since a
//! cleared row of high cards removes a large chunk of score at once.

use crate::cards::Card;
use crate::players::Table;

/// True when the row is non-empty, fully visible and single-valued.
#[must_use]
pub fn row_is_complete(row: &[Card]) -> bool {
    let Some(first) = row.first() else {
        return false;
    };
    row.iter()
        .all(|card| card.is_visible() && card.value() == first.value())
}

/// Remove every complete row from the table. Returns the number removed.
pub fn clear_completed_rows(table: &mut Table) -> usize {
    let before = table.row_count();
    table.retain_rows(|row| !row_is_complete(row));
    before - table.row_count()
}

/// Sum of the values of every card left on the table.
#[must_use]
pub fn table_score(table: &Table) -> i32 {
    table.cards().map(|card| i32::from(card.value())).sum()
}

/// Index of the lowest score. Ties go to the earliest index.
#[must_use]
pub fn winning_index(scores: &[i32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, i32)>, (i, &score)| match best {
            Some((_, best_score)) if best_score <= score => best,
            _ => Some((i, score)),
        })
        .map(|(i, _)| i)
}

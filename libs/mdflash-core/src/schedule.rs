//! Queries over a set of cards.

use chrono::NaiveDate;

use crate::dates::today;
use crate::error::{DeckError, Result};
use crate::types::Card;

/// Match a category against user input.
///
/// Empty input matches everything; otherwise the input must be a
/// case-insensitive prefix of the category.
pub fn compare_category(category: &str, input: &str) -> bool {
    if input.is_empty() {
        return true;
    }
    category.to_lowercase().starts_with(&input.to_lowercase())
}

/// Nearest due date among the cards, measured from the current local date.
pub fn find_closest_date<'a, I>(cards: I) -> Result<Option<NaiveDate>>
where
    I: IntoIterator<Item = &'a Card>,
{
    find_closest_date_from(cards, today())
}

/// Nearest due date strictly after `today`.
///
/// Fails with `OverdueFound` as soon as a card is due on or before `today`.
/// Returns `None` for an empty set.
pub fn find_closest_date_from<'a, I>(cards: I, today: NaiveDate) -> Result<Option<NaiveDate>>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut closest: Option<NaiveDate> = None;
    for card in cards {
        if card.due <= today {
            return Err(DeckError::OverdueFound { due: card.due });
        }
        if closest.map_or(true, |c| card.due < c) {
            closest = Some(card.due);
        }
    }
    Ok(closest)
}

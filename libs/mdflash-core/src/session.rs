//! A deck opened for study, optionally narrowed to one category.

use std::path::Path;

use chrono::NaiveDate;

use crate::deck::Deck;
use crate::error::{DeckError, Result};
use crate::schedule::{compare_category, find_closest_date_from};
use crate::types::{Card, DeckConfig};

#[derive(Debug, Clone)]
pub struct Session {
    pub deck: Deck,
    /// Category prefix filter; empty selects every card.
    pub category: String,
}

impl Session {
    pub fn new(deck: Deck, category: impl Into<String>) -> Self {
        Self {
            deck,
            category: category.into(),
        }
    }

    /// Load the deck and make sure the category filter matches something.
    pub fn open(
        path: impl AsRef<Path>,
        config: DeckConfig,
        category: impl Into<String>,
    ) -> Result<Self> {
        let session = Self::new(Deck::load(path, config)?, category);
        session.check_category()?;
        Ok(session)
    }

    /// `CategoryNotFound` unless at least one card matches the filter.
    pub fn check_category(&self) -> Result<()> {
        if self
            .deck
            .cards
            .iter()
            .any(|c| compare_category(&c.category, &self.category))
        {
            return Ok(());
        }
        Err(DeckError::CategoryNotFound {
            category: self.category.clone(),
        })
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for card in &self.deck.cards {
            if !categories.contains(&card.category.as_str()) {
                categories.push(&card.category);
            }
        }
        categories
    }

    /// Cards matching the category filter.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .cards
            .iter()
            .filter(move |c| compare_category(&c.category, &self.category))
    }

    /// Enabled cards in the category that are due on or before `today`.
    pub fn due_cards(&self, today: NaiveDate) -> Vec<&Card> {
        self.cards().filter(|c| c.is_due(today)).collect()
    }

    /// Nearest upcoming review among enabled cards in the category.
    pub fn next_due_date(&self, today: NaiveDate) -> Result<Option<NaiveDate>> {
        find_closest_date_from(self.cards().filter(|c| c.enabled), today)
    }

    /// Persist a card's schedule through the underlying deck.
    pub fn update_card(&mut self, card: &Card) -> Result<()> {
        self.deck.update_card(card)
    }
}

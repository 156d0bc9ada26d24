//! Deck commands.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::warn;

use mdflash_core::dates::{format_date, today};
use mdflash_core::{create_share_copy, Card, DeckConfig, DeckError, Session};

/// Requested changes to a card's schedule; `None` keeps the current value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScheduleChange {
    pub box_index: Option<u32>,
    pub due: Option<NaiveDate>,
    pub enabled: Option<bool>,
}

/// Load a deck and print a summary or the matching cards as JSON.
pub fn load(file: &Path, config: DeckConfig, category: &str, json: bool) -> anyhow::Result<()> {
    let session = open_session(file, config, category)?;

    if json {
        let cards: Vec<&Card> = session.cards().collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    let today = today();
    println!("{}", session.deck.path.display());
    println!(
        "{} cards, {} due, box intervals (days): {}",
        session.cards().count(),
        session.due_cards(today).len(),
        session.deck.box_intervals()
    );
    for name in session.categories() {
        let count = session
            .cards()
            .filter(|c| c.category == name)
            .count();
        if count > 0 {
            println!("  {name}: {count}");
        }
    }
    Ok(())
}

/// Print every category, numbered, in file order.
pub fn categories(file: &Path, config: DeckConfig) -> anyhow::Result<()> {
    let session = open_session(file, config, "")?;
    for (idx, name) in session.categories().iter().enumerate() {
        println!("({}) {}", idx + 1, name);
    }
    Ok(())
}

/// Print the next review date, or report that cards are already due.
pub fn next(file: &Path, config: DeckConfig, category: &str) -> anyhow::Result<()> {
    let session = open_session(file, config, category)?;
    let today = today();

    match session.next_due_date(today) {
        Ok(Some(date)) => {
            let days = (date - today).num_days();
            println!("next review on {} (in {} days)", format_date(date), days);
        }
        Ok(None) => println!("no enabled cards"),
        Err(DeckError::OverdueFound { .. }) => println!("cards are due now"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// List the cards due today or earlier.
pub fn due(file: &Path, config: DeckConfig, category: &str) -> anyhow::Result<()> {
    let session = open_session(file, config, category)?;
    for card in session.due_cards(today()) {
        println!(
            "{}  box {}  {}  {}",
            card.id,
            card.box_index,
            format_date(card.due),
            card.front
        );
    }
    Ok(())
}

/// Apply a schedule change to one card and persist it.
///
/// A new box without an explicit due date schedules the card that box's
/// interval from today.
pub fn set(
    file: &Path,
    config: DeckConfig,
    id: &str,
    change: ScheduleChange,
) -> anyhow::Result<()> {
    let mut session = open_session(file, config, "")?;

    let mut card = session
        .deck
        .card(id)
        .cloned()
        .ok_or_else(|| DeckError::CardNotFound { id: id.to_string() })?;

    if let Some(box_index) = change.box_index {
        let intervals = session.deck.box_intervals();
        if box_index > intervals.max_box() {
            warn!(
                box_index,
                max_box = intervals.max_box(),
                "box has no interval of its own"
            );
        }
        if change.due.is_none() {
            card.due = today()
                .checked_add_signed(intervals.interval(box_index))
                .with_context(|| format!("box {box_index} interval runs past the calendar"))?;
        }
        card.box_index = box_index;
    }
    if let Some(due) = change.due {
        card.due = due;
    }
    if let Some(enabled) = change.enabled {
        card.enabled = enabled;
    }

    session
        .update_card(&card)
        .with_context(|| format!("failed to update card {id}"))?;
    println!("{}  {}", card.id, card.metadata_comment());
    Ok(())
}

/// Write the share copy and print where it went.
pub fn share(file: &Path) -> anyhow::Result<()> {
    let target = create_share_copy(file)
        .with_context(|| format!("failed to share {}", file.display()))?;
    println!("{}", target.display());
    Ok(())
}

fn open_session(file: &Path, config: DeckConfig, category: &str) -> anyhow::Result<Session> {
    Session::open(file, config, category)
        .with_context(|| format!("failed to open {}", file.display()))
}

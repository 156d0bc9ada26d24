//! Scheduling metadata embedded in card headers.
//!
//! # Format
//! ```markdown
//! ## What is Rust? <!--a1B2;0;2025-01-01;true-->
//! ## Legacy header <!--x9Yz;2;2025-01-01-->
//! ```
//!
//! Fields are identifier, box, due date and an optional enabled flag.
//! A missing enabled flag reads as enabled.

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::debug;

use crate::dates::{format_date, parse_date};
use crate::error::{DeckError, Result};
use crate::ids::IdGenerator;

static METADATA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--\s*(.{4});([0-9]+);([0-9]{4}-[0-9]{2}-[0-9]{2})(?:;(true|false))?\s*-->").unwrap()
});

/// Any HTML comment, well-formed metadata or not, with the whitespace before it.
static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*<!--.*-->").unwrap());

/// Decoded metadata comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub id: String,
    pub box_index: u32,
    pub due: NaiveDate,
    /// `None` when the comment used the legacy three-field form.
    pub enabled: Option<bool>,
}

impl Metadata {
    /// Default scheduling state for a card seen for the first time.
    pub fn fresh(id: String, today: NaiveDate) -> Self {
        Self {
            id,
            box_index: 0,
            due: today,
            enabled: Some(true),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Encode in the four-field form regardless of the decoded shape.
    pub fn to_canonical(&self) -> String {
        encode(&self.id, self.box_index, self.due, self.is_enabled())
    }
}

/// Keeps the decoded shape: legacy comments stay three-field.
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<!--{};{};{}", self.id, self.box_index, format_date(self.due))?;
        if let Some(enabled) = self.enabled {
            write!(f, ";{}", enabled)?;
        }
        f.write_str("-->")
    }
}

/// Decode the first metadata comment in a line.
///
/// Returns `Ok(None)` when the line carries no well-formed comment, and
/// `InvalidMetadata` when it matches the grammar but the box overflows or the
/// date does not exist.
pub fn decode(line: &str) -> Result<Option<Metadata>> {
    let Some(caps) = METADATA_PATTERN.captures(line) else {
        return Ok(None);
    };

    let invalid = || DeckError::InvalidMetadata {
        line: line.to_string(),
    };
    let box_index = caps[2].parse::<u32>().map_err(|_| invalid())?;
    let due = parse_date(&caps[3]).ok_or_else(invalid)?;
    let enabled = caps.get(4).map(|m| m.as_str() == "true");

    Ok(Some(Metadata {
        id: caps[1].to_string(),
        box_index,
        due,
        enabled,
    }))
}

/// Canonical four-field metadata comment.
pub fn encode(id: &str, box_index: u32, due: NaiveDate, enabled: bool) -> String {
    format!("<!--{};{};{};{}-->", id, box_index, format_date(due), enabled)
}

/// Remove every HTML comment from a line, along with the whitespace before it.
pub fn strip_comments(line: &str) -> String {
    COMMENT_PATTERN.replace_all(line, "").into_owned()
}

/// Replace whatever comment a header carries with fresh default metadata.
pub fn initialize(
    line: &str,
    ids: &mut impl IdGenerator,
    today: NaiveDate,
) -> (String, Metadata) {
    let metadata = Metadata::fresh(ids.generate(), today);
    let stripped = strip_comments(line);
    let updated = format!("{} {}", stripped.trim_end(), metadata.to_canonical());
    debug!(id = %metadata.id, "initialized card metadata");
    (updated, metadata)
}

/// Give a header a new identifier, keeping box, due date and enabled flag as
/// written. Lines without metadata get a fresh default block.
///
/// Fails with `InvalidMetadata` when the existing comment matches the grammar
/// but does not decode.
pub fn reassign_id(
    line: &str,
    ids: &mut impl IdGenerator,
    today: NaiveDate,
) -> Result<(String, String)> {
    let id = ids.generate();

    let Some(current) = decode(line)? else {
        let fresh = Metadata::fresh(id.clone(), today);
        let updated = format!("{} {}", line.trim_end_matches(' '), fresh.to_canonical());
        debug!(%id, "appended metadata while reassigning id");
        return Ok((updated, id));
    };

    let old_id = current.id.clone();
    let replacement = Metadata {
        id: id.clone(),
        ..current
    }
    .to_string();
    let updated = METADATA_PATTERN
        .replace_all(line, NoExpand(&replacement))
        .into_owned();
    debug!(old = %old_id, new = %id, "reassigned card id");
    Ok((updated, id))
}

/// Pattern matching the metadata comment of one specific card.
pub(crate) fn pattern_for_id(id: &str) -> Regex {
    Regex::new(&format!(
        r"<!--\s*{};[0-9]+;[0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}}(?:;(?:true|false))?\s*-->",
        regex::escape(id)
    ))
    .unwrap()
}

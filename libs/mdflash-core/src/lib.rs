//! Spaced-repetition decks stored as plain markdown.
//!
//! Provides:
//! - Metadata codec for the `<!--ID;BOX;DATE;ENABLED-->` header comments
//! - Identifier allocation with an injectable random source
//! - Deck loading that repairs missing or duplicate metadata in place
//! - Card updates, due-date queries and category filtering
//! - Share copies with all review state reset

pub mod dates;
pub mod deck;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod parser;
pub mod schedule;
pub mod session;
pub mod share;
pub mod types;

pub use deck::{normalize_lines, update_card_in_file, Deck};
pub use error::{DeckError, Result};
pub use ids::{IdGenerator, RandomIds, ID_ALPHABET, ID_LEN};
pub use metadata::Metadata;
pub use parser::parse;
pub use schedule::{compare_category, find_closest_date, find_closest_date_from};
pub use session::Session;
pub use share::{create_share_copy, create_share_copy_with, share_path};
pub use types::{BoxIntervals, Card, DeckConfig, ParseIntervalsError};

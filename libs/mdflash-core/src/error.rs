//! Error types for mdflash-core.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while loading, updating or exporting a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("no file specified")]
    NoFileSpecified,

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("no flashcards found in {}", path.display())]
    NoCardsFound { path: PathBuf },

    #[error("category not found: {category}")]
    CategoryNotFound { category: String },

    #[error("found card due on {due}, which is not in the future")]
    OverdueFound { due: NaiveDate },

    #[error("card not found: {id}")]
    CardNotFound { id: String },

    #[error("invalid metadata in line: {line}")]
    InvalidMetadata { line: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckError {
    /// Whether the caller can report the error and carry on.
    ///
    /// I/O failures after a file was opened and metadata the grammar matched
    /// but could not be parsed leave the deck in an unknown state.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::InvalidMetadata { .. })
    }
}

//! Loading and updating a deck file.
//!
//! A load reads every line, gives each card header valid and unique metadata,
//! writes the lines back once and then parses the same in-memory lines. The
//! returned cards therefore always match what is on disk.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use regex::NoExpand;
use tracing::{debug, info};

use crate::dates::today;
use crate::error::{DeckError, Result};
use crate::ids::{IdGenerator, RandomIds};
use crate::metadata;
use crate::parser::{self, is_card_header};
use crate::types::{BoxIntervals, Card, DeckConfig};

/// One markdown file and the cards parsed from it.
#[derive(Debug, Clone)]
pub struct Deck {
    pub path: PathBuf,
    pub config: DeckConfig,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Load a deck, assigning metadata with random ids and today's date.
    pub fn load(path: impl AsRef<Path>, config: DeckConfig) -> Result<Self> {
        Self::load_with(path, config, &mut RandomIds::new(), today())
    }

    /// Load a deck with an explicit id source and date for new metadata.
    pub fn load_with(
        path: impl AsRef<Path>,
        config: DeckConfig,
        ids: &mut impl IdGenerator,
        today: NaiveDate,
    ) -> Result<Self> {
        let path = resolve_path(path.as_ref())?;

        let lines = read_lines(&path)?;
        let lines = normalize_lines(lines, ids, today)?;
        write_lines(&path, &lines)?;

        let cards = parser::parse(lines.iter().map(String::as_str))?;
        if cards.is_empty() {
            return Err(DeckError::NoCardsFound { path });
        }

        info!(path = %path.display(), cards = cards.len(), "loaded deck");
        Ok(Self {
            path,
            config,
            cards,
        })
    }

    pub fn box_intervals(&self) -> &BoxIntervals {
        &self.config.box_intervals
    }

    /// Find a card by id.
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Persist a card's box, due date and enabled flag, then mirror them in
    /// the in-memory list.
    pub fn update_card(&mut self, card: &Card) -> Result<()> {
        update_card_in_file(&self.path, card)?;
        if let Some(existing) = self.cards.iter_mut().find(|c| c.id == card.id) {
            existing.box_index = card.box_index;
            existing.due = card.due;
            existing.enabled = card.enabled;
        }
        Ok(())
    }
}

/// Give every card header well-formed metadata and a file-unique id.
pub fn normalize_lines(
    mut lines: Vec<String>,
    ids: &mut impl IdGenerator,
    today: NaiveDate,
) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut initialized = 0usize;
    let mut reassigned = 0usize;

    for line in lines.iter_mut().filter(|l| is_card_header(l)) {
        let mut id = match metadata::decode(line)? {
            Some(meta) => meta.id,
            None => {
                let (updated, meta) = metadata::initialize(line, ids, today);
                *line = updated;
                initialized += 1;
                meta.id
            }
        };

        while seen.contains(&id) {
            let (updated, new_id) = metadata::reassign_id(line, ids, today)?;
            *line = updated;
            id = new_id;
            reassigned += 1;
        }
        seen.insert(id);
    }

    if initialized > 0 || reassigned > 0 {
        debug!(initialized, reassigned, "normalized card metadata");
    }
    Ok(lines)
}

/// Rewrite the metadata comment of one card wherever it appears in the file.
///
/// Fails with `CardNotFound` and leaves the file alone when no comment carries
/// the card's id.
pub fn update_card_in_file(path: &Path, card: &Card) -> Result<()> {
    let mut content = String::new();
    open(path)?.read_to_string(&mut content)?;

    let pattern = metadata::pattern_for_id(&card.id);
    if !pattern.is_match(&content) {
        return Err(DeckError::CardNotFound {
            id: card.id.clone(),
        });
    }

    let comment = card.metadata_comment();
    let updated = pattern.replace_all(&content, NoExpand(&comment));
    write_content(path, &updated)?;

    debug!(id = %card.id, box_index = card.box_index, due = %card.due, "updated card");
    Ok(())
}

/// Absolute form of a user-supplied path.
pub(crate) fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(DeckError::NoFileSpecified);
    }
    Ok(std::path::absolute(path)?)
}

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|_| DeckError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open(path)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines)
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    write_content(path, &lines.join("\n"))?;
    info!(path = %path.display(), lines = lines.len(), "wrote deck");
    Ok(())
}

fn write_content(path: &Path, content: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

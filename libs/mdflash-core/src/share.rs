//! Share copies of a deck.
//!
//! A share copy keeps every line of the deck but resets each card's metadata
//! to a fresh id, box 0, due today and enabled, so no review progress leaks.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::dates::today;
use crate::deck::{open, resolve_path};
use crate::error::Result;
use crate::ids::{IdGenerator, RandomIds};
use crate::metadata;
use crate::parser::is_card_header;

/// Sibling path of the share copy: `deck.md` becomes `deck.share.md`.
pub fn share_path(path: &Path) -> PathBuf {
    let raw = path.as_os_str().to_string_lossy();
    let base = raw.strip_suffix(".md").unwrap_or(&raw);
    PathBuf::from(format!("{}.share.md", base))
}

/// Write the share copy next to the deck and return its path.
pub fn create_share_copy(path: impl AsRef<Path>) -> Result<PathBuf> {
    create_share_copy_with(path, &mut RandomIds::new(), today())
}

/// Write the share copy with an explicit id source and date.
pub fn create_share_copy_with(
    path: impl AsRef<Path>,
    ids: &mut impl IdGenerator,
    today: NaiveDate,
) -> Result<PathBuf> {
    let source = resolve_path(path.as_ref())?;
    let reader = BufReader::new(open(&source)?);

    let target = share_path(&source);
    let mut writer = BufWriter::new(File::create(&target)?);

    let mut seen = HashSet::new();
    let mut cards = 0usize;
    for line in reader.lines() {
        let mut line = line?;
        if is_card_header(&line) {
            line = loop {
                let (updated, meta) = metadata::initialize(&line, ids, today);
                if seen.insert(meta.id) {
                    break updated;
                }
            };
            cards += 1;
        }
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    writer.get_ref().sync_all()?;

    info!(source = %source.display(), target = %target.display(), cards, "wrote share copy");
    Ok(target)
}

//! Deck settings resolved from flags and the environment.

use mdflash_core::{BoxIntervals, DeckConfig};
use tracing::debug;

/// Build the deck configuration; unset intervals fall back to the defaults.
pub fn deck_config(box_intervals: Option<BoxIntervals>) -> DeckConfig {
    let box_intervals = box_intervals.unwrap_or_default();
    debug!(%box_intervals, "using box intervals");
    DeckConfig::new(box_intervals)
}

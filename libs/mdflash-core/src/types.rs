//! Core types for markdown decks.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::metadata;

/// Card parsed from a level-2/3/4 header and the lines below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub category: String,
    pub front: String,
    pub back: String,
    #[serde(rename = "box")]
    pub box_index: u32,
    pub due: NaiveDate,
    pub enabled: bool,
}

impl Card {
    /// Canonical metadata comment for the card's current schedule.
    pub fn metadata_comment(&self) -> String {
        metadata::encode(&self.id, self.box_index, self.due, self.enabled)
    }

    /// Whether the card should be reviewed on `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.enabled && self.due <= today
    }
}

/// Review interval for each Leitner box, indexed by box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxIntervals(Vec<Duration>);

/// Default intervals in days.
const DEFAULT_INTERVAL_DAYS: [i64; 8] = [0, 1, 3, 7, 14, 30, 60, 120];

impl BoxIntervals {
    /// Build from day counts. Returns `None` for an empty table, or for a
    /// count that is negative or too large for a `Duration`.
    pub fn from_days(days: &[i64]) -> Option<Self> {
        if days.is_empty() || days.iter().any(|d| *d < 0) {
            return None;
        }
        let intervals = days
            .iter()
            .map(|d| Duration::try_days(*d))
            .collect::<Option<Vec<_>>>()?;
        Some(Self(intervals))
    }

    /// Interval for a box; boxes past the end use the last interval.
    pub fn interval(&self, box_index: u32) -> Duration {
        let idx = (box_index as usize).min(self.0.len() - 1);
        self.0[idx]
    }

    /// Highest box with its own interval.
    pub fn max_box(&self) -> u32 {
        (self.0.len() - 1) as u32
    }
}

impl Default for BoxIntervals {
    fn default() -> Self {
        Self(
            DEFAULT_INTERVAL_DAYS
                .iter()
                .map(|d| Duration::days(*d))
                .collect(),
        )
    }
}

/// Error parsing a comma-separated interval list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid box intervals '{0}': expected comma-separated non-negative day counts")]
pub struct ParseIntervalsError(String);

impl FromStr for BoxIntervals {
    type Err = ParseIntervalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseIntervalsError(s.to_string());
        let days = s
            .split(',')
            .map(|part| part.trim().parse::<i64>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_days(&days).ok_or_else(err)
    }
}

impl fmt::Display for BoxIntervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self.0.iter().map(|d| d.num_days().to_string()).collect();
        f.write_str(&days.join(","))
    }
}

/// Settings handed to a deck when it is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckConfig {
    pub box_intervals: BoxIntervals,
}

impl DeckConfig {
    pub fn new(box_intervals: BoxIntervals) -> Self {
        Self { box_intervals }
    }
}

//! Calendar-day helpers for due dates.

use chrono::{Local, NaiveDate};

/// Date format used inside metadata comments.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date in the local time zone, without a time component.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as YYYY-MM-DD.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a YYYY-MM-DD date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

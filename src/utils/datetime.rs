//! Date and time utility functions
//!
//! This module provides the date handling the exercise log is built on:
//! timestamp parsing, truncation to calendar days, and the formats used by
//! section headers and rows.

use chrono::{DateTime, Local, NaiveDate};

/// Date format accepted by the date-filter input
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format shown on exercise rows
pub const TIME_SHORT_FORMAT: &str = "%H:%M";

/// Full date format used for section headers, e.g. "Monday, January 1, 2024"
pub const SECTION_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_INPUT_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_INPUT_FORMAT).to_string()
}

/// Parse a stored RFC 3339 timestamp into local time.
///
/// Returns `None` for malformed input; callers treat that the same as an
/// absent timestamp.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Truncate a local datetime to its calendar day
pub fn day_of(dt: DateTime<Local>) -> NaiveDate {
    dt.date_naive()
}

/// Format a day for use as a section header
pub fn format_section_date(day: NaiveDate) -> String {
    day.format(SECTION_DATE_FORMAT).to_string()
}

/// Format the time-of-day portion of a local datetime
pub fn format_time_short(dt: DateTime<Local>) -> String {
    dt.format(TIME_SHORT_FORMAT).to_string()
}

/// Serialize a local datetime to the RFC 3339 form the store keeps
pub fn to_stored_timestamp(dt: DateTime<Local>) -> String {
    dt.to_rfc3339()
}

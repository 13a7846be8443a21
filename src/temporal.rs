//! Lenient date handling for raw timestamp fields.

use chrono::{Datelike, NaiveDate};

/// Parse the `%Y-%m-%d` prefix of a raw timestamp field.
///
/// Source timestamps carry a time-of-day suffix that the analysis never
/// uses, so only the leading date is parsed. Malformed or empty input
/// yields `None` rather than an error; downstream stages treat a null
/// date as "exclude from date-bound computations".
pub fn parse_date_prefix(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let prefix = trimmed.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Truncate a date to its calendar month as a `(year, month)` key.
pub fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

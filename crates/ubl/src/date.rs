//! Issue-date normalization.
//!
//! Stored issue dates arrive as raw text (plain dates or full timestamps,
//! depending on what the caller originally submitted). The document always
//! carries a plain `YYYY-MM-DD`; anything unparsable falls back to the
//! current processing date rather than failing.

use chrono::{DateTime, NaiveDate, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize a stored issue date to `YYYY-MM-DD`.
///
/// `today` is the fallback for an absent or unparsable value; the caller
/// passes the current processing date (injected so tests stay
/// deterministic).
pub fn normalize_issue_date(raw: Option<&str>, today: NaiveDate) -> String {
    raw.and_then(parse_calendar_date)
        .unwrap_or(today)
        .format(DATE_FORMAT)
        .to_string()
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    // Timestamps normalize to their UTC calendar date.
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    None
}

//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp used for character creation times.
pub type Timestamp = DateTime<Utc>;

/// Parse a creation timestamp as delivered by the character API.
///
/// Accepts RFC 3339 (`2017-11-04T18:48:46.250Z`) and bare calendar dates
/// (`2020-01-02`, read as midnight UTC). Anything else yields `None`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format the calendar date of a timestamp as `M/D/YYYY`, without the time.
#[must_use]
pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}

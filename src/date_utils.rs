// File: src/date_utils.rs
// ISO dates (2017-03-01) to the DD/MM/YYYY form shown on the page
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;

/// `YYYY-MM-DD` -> `DD/MM/YYYY` by field position, no calendar check.
///
/// Never fails: fields are cut at fixed character offsets (year 0..4, month
/// 5..7, day 8..10), clamped to the input, so malformed input comes back as
/// a malformed string. Anything not shaped like an ISO date is logged.
pub fn iso_date_to_local(date: &str) -> String {
    if !looks_like_iso_date(date) {
        warn!("Unexpected date shape '{}', expected YYYY-MM-DD", date);
    }

    let year = char_slice(date, 0, 4);
    let month = char_slice(date, 5, 7);
    let day = char_slice(date, 8, 10);

    format!("{}/{}/{}", day, month, year)
}

/// Strict parse of the leading `YYYY-MM-DD`; a trailing time part
/// (`2017-03-01T10:00:00Z`) is ignored.
pub fn parse_iso_date(date: &str) -> Result<NaiveDate> {
    let head = char_slice(date, 0, 10);
    let rest = &date[head.len()..];
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        anyhow::bail!("Invalid ISO date '{}': trailing characters", date);
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .with_context(|| format!("Invalid ISO date '{}'", date))
}

/// Validating counterpart of [`iso_date_to_local`].
pub fn try_iso_date_to_local(date: &str) -> Result<String> {
    parse_iso_date(date).map(format_local_date)
}

pub fn format_local_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn looks_like_iso_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() >= 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

// Substring by character index, clamped like JS `substring`.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |idx: usize| s.char_indices().nth(idx).map_or(s.len(), |(b, _)| b);
    let from = byte_at(start);
    let to = byte_at(end);
    &s[from..to.max(from)]
}

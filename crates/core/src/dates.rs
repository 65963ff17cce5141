//! Gallery date handling.
//!
//! Dates travel as ISO `YYYY-MM-DD` strings, so lexicographic order is
//! chronological order and no parsing is needed to pick the newest one.

use chrono::{Local, NaiveDate};

use crate::error::CoreError;

/// Format used by every date-keyed endpoint.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of an ISO calendar date.
const ISO_DATE_LEN: usize = 10;

/// Today's local calendar date in [`DATE_FORMAT`].
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Sort dates newest first.
pub fn sort_descending(dates: &mut [String]) {
    dates.sort_by(|a, b| b.cmp(a));
}

/// Pick the default selection: the most recent date, or an empty string
/// when no dates exist.
pub fn select_default_date(dates: &[String]) -> String {
    dates.iter().max().cloned().unwrap_or_default()
}

/// Resolve the date used for a video fetch.
///
/// Empty input falls back to `today`; anything else is truncated to its
/// first ten characters so full timestamps collapse to their date.
pub fn resolve_fetch_date(selected: &str, today: &str) -> String {
    let selected = selected.trim();
    let date = if selected.is_empty() { today } else { selected };
    date.chars().take(ISO_DATE_LEN).collect()
}

/// Validate a user-supplied date, returning it normalised.
pub fn parse_date(input: &str) -> Result<String, CoreError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| CoreError::Validation(format!("'{trimmed}' is not a YYYY-MM-DD date")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(dates: &[&str]) -> Vec<String> {
        dates.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn default_is_most_recent() {
        let dates = owned(&["2024-01-01", "2024-03-15", "2024-02-10"]);
        assert_eq!(select_default_date(&dates), "2024-03-15");
    }

    #[test]
    fn default_of_empty_is_empty() {
        assert_eq!(select_default_date(&[]), "");
    }

    #[test]
    fn sort_is_newest_first() {
        let mut dates = owned(&["2024-01-01", "2024-03-15", "2024-02-10"]);
        sort_descending(&mut dates);
        assert_eq!(dates, owned(&["2024-03-15", "2024-02-10", "2024-01-01"]));
    }

    #[test]
    fn resolve_empty_uses_today() {
        assert_eq!(resolve_fetch_date("", "2024-05-05"), "2024-05-05");
        assert_eq!(resolve_fetch_date("  ", "2024-05-05"), "2024-05-05");
    }

    #[test]
    fn resolve_truncates_timestamps() {
        assert_eq!(
            resolve_fetch_date("2024-05-05T10:11:12.000Z", "2000-01-01"),
            "2024-05-05"
        );
    }

    #[test]
    fn today_has_iso_shape() {
        let t = today();
        assert_eq!(t.len(), 10);
        assert!(parse_date(&t).is_ok());
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), "2024-02-29");
    }
}

//! Card date formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render an API date as `DD/MM/YYYY`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` and plain
/// `YYYY-MM-DD`. The calendar date is taken as written, without shifting to
/// the local timezone. Returns `None` for empty or unparsable input.
pub fn format_date_dmy(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;

    Some(date.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(format_date_dmy("2024-03-07").as_deref(), Some("07/03/2024"));
    }

    #[test]
    fn test_rfc3339_keeps_written_date() {
        assert_eq!(
            format_date_dmy("2023-12-31T23:30:00.000Z").as_deref(),
            Some("31/12/2023")
        );
        assert_eq!(
            format_date_dmy("2023-01-05T08:00:00+05:30").as_deref(),
            Some("05/01/2023")
        );
    }

    #[test]
    fn test_naive_timestamp() {
        assert_eq!(format_date_dmy("2022-06-15T10:11:12").as_deref(), Some("15/06/2022"));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_date_dmy(""), None);
        assert_eq!(format_date_dmy("   "), None);
        assert_eq!(format_date_dmy("not a date"), None);
        assert_eq!(format_date_dmy("2024-13-01"), None);
    }
}

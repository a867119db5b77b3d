//! Compact timestamp handling for track observations.
//!
//! Best-track tables encode observation times as a fixed 12-character
//! `YYYYMMDDHHMM` string with no separators; all times are UTC.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Parse the fixed 12-character `YYYYMMDDHHMM` layout as UTC calendar time.
///
/// Positional: chars 0-3 year, 4-5 month (1-12), 6-7 day, 8-9 hour,
/// 10-11 minute. Returns `None` for inputs shorter than 12 characters or
/// with non-numeric / calendar-invalid components.
pub fn parse_compact_utc(s: &str) -> Option<DateTime<Utc>> {
    if s.len() < 12 {
        return None;
    }

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let month: u32 = s.get(4..6)?.parse().ok()?;
    let day: u32 = s.get(6..8)?.parse().ok()?;
    let hour: u32 = s.get(8..10)?.parse().ok()?;
    let minute: u32 = s.get(10..12)?.parse().ok()?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Format a UTC time back into the 12-character `YYYYMMDDHHMM` layout.
pub fn format_compact_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%d%H%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_compact() {
        let dt = parse_compact_utc("202309010630").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month(), 9);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 6);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_roundtrip_preserves_original() {
        for s in ["202309010000", "199912312359", "202402290600"] {
            let dt = parse_compact_utc(s).unwrap();
            assert_eq!(format_compact_utc(&dt), s);
        }
    }

    #[test]
    fn test_short_input_rejected() {
        assert!(parse_compact_utc("").is_none());
        assert!(parse_compact_utc("20230901").is_none());
        assert!(parse_compact_utc("20230901063").is_none());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(parse_compact_utc("2023o9010630").is_none());
        assert!(parse_compact_utc("abcdefghijkl").is_none());
    }

    #[test]
    fn test_calendar_invalid_rejected() {
        // Month 13, day 32, hour 25
        assert!(parse_compact_utc("202313010000").is_none());
        assert!(parse_compact_utc("202309320000").is_none());
        assert!(parse_compact_utc("202309012500").is_none());
        // Feb 29 in a non-leap year
        assert!(parse_compact_utc("202302290000").is_none());
    }

    #[test]
    fn test_trailing_characters_ignored() {
        // Only the first 12 characters participate
        let dt = parse_compact_utc("202309010630Z").unwrap();
        assert_eq!(format_compact_utc(&dt), "202309010630");
    }
}

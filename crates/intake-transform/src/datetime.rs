//! Timestamp parsing for intake exports.
//!
//! Exports carry RFC 3339 timestamps; older workflow runs used naive
//! datetimes or bare dates. Anything else is unparsable and becomes a
//! null in the table, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a timestamp string, normalizing offsets to UTC.
///
/// Accepted forms: RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS` (both with optional fractional seconds), and
/// bare `YYYY-MM-DD` dates (midnight).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_rfc3339_with_zulu() {
        let dt = parse_timestamp("2026-01-11T10:00:00Z").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let dt = parse_timestamp("2026-01-11T10:00:00-05:00").unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn parses_naive_and_date_only_forms() {
        assert!(parse_timestamp("2026-01-11T10:00:00").is_some());
        assert!(parse_timestamp("2026-01-11 10:00:00").is_some());
        let midnight = parse_timestamp("2026-01-11").unwrap();
        assert_eq!(midnight.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("11/01/2026").is_none());
    }
}

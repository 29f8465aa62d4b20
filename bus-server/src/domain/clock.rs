//! Clock helpers for itinerary times.
//!
//! Itineraries report wall-clock times as "HH:MM" strings. Internally times are
//! `NaiveDateTime` so that trips crossing midnight advance the date.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid clock string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time {input:?}: expected HH:MM")]
pub struct ClockError {
    input: String,
}

/// Format a time as zero-padded 24-hour "HH:MM".
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parse a 24-hour "HH:MM" clock string.
pub fn parse_clock(s: &str) -> Result<NaiveTime, ClockError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| ClockError {
        input: s.to_string(),
    })
}

/// Convert fractional minutes to a duration with millisecond precision.
///
/// Sub-millisecond remainders are truncated toward zero.
pub fn minutes_to_duration(minutes: f64) -> Duration {
    Duration::milliseconds((minutes * 60_000.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_clock(at(7, 5, 0)), "07:05");
        assert_eq!(format_clock(at(23, 59, 59)), "23:59");
        assert_eq!(format_clock(at(0, 0, 0)), "00:00");
    }

    #[test]
    fn parses_valid_clock() {
        assert_eq!(parse_clock("14:30").unwrap(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(parse_clock(" 08:00 ").unwrap(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn rejects_invalid_clock() {
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("12:60").is_err());
        assert!(parse_clock("noon").is_err());
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn clock_error_display() {
        let err = parse_clock("xx").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid time "xx": expected HH:MM"#);
    }

    #[test]
    fn fractional_minutes() {
        assert_eq!(minutes_to_duration(1.5), Duration::seconds(90));
        assert_eq!(minutes_to_duration(0.0), Duration::zero());
        assert_eq!(minutes_to_duration(-2.0), Duration::minutes(-2));
    }

    #[test]
    fn crossing_midnight_advances_date() {
        let late = at(23, 50, 0) + minutes_to_duration(20.0);
        assert_eq!(format_clock(late), "00:10");
        assert_eq!(late.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
    }
}

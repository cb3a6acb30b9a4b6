//! Date parsing and calendar predicates
//!
//! Accepted inputs: RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` (UTC) and bare
//! `YYYY-MM-DD` dates (UTC midnight). Anything else is not a date.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Parse a textual date into a UTC instant
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a form value; only strings can carry dates
pub fn parse_datetime_value(value: &Value) -> Option<DateTime<Utc>> {
    value.as_str().and_then(parse_datetime)
}

/// True when the text parses as a date
pub fn is_valid_date(input: &str) -> bool {
    parse_datetime(input).is_some()
}

/// Completed years between `birth` and `today`, using calendar arithmetic.
/// `None` when the birth date lies after `today`.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Strictly after `now`
pub fn is_future_at(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    instant > now
}

/// Strictly before `now`
pub fn is_past_at(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    instant < now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("2024-03-01", true)]
    #[test_case("2024-03-01T10:30:00", true)]
    #[test_case("2024-03-01T10:30:00Z", true)]
    #[test_case("2024-03-01T10:30:00-06:00", true)]
    #[test_case("2024-02-30", false)]
    #[test_case("01/03/2024", false)]
    #[test_case("", false; "empty input")]
    fn test_is_valid_date(input: &str, expected: bool) {
        assert_eq!(is_valid_date(input), expected);
    }

    #[test]
    fn test_parse_normalizes_to_utc() {
        let parsed = parse_datetime("2024-03-01T10:30:00-06:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 16, 30, 0).unwrap());

        let midnight = parse_datetime("2024-03-01").unwrap();
        assert_eq!(midnight, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_value_requires_string() {
        assert!(parse_datetime_value(&json!("2024-03-01")).is_some());
        assert!(parse_datetime_value(&json!(20240301)).is_none());
        assert!(parse_datetime_value(&json!(null)).is_none());
    }

    #[test]
    fn test_age_on_is_calendar_aware() {
        let birth = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();

        let day_before = NaiveDate::from_ymd_opt(2016, 6, 14).unwrap();
        assert_eq!(age_on(birth, day_before), Some(15));

        let birthday = NaiveDate::from_ymd_opt(2016, 6, 15).unwrap();
        assert_eq!(age_on(birth, birthday), Some(16));

        let earlier = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert_eq!(age_on(birth, earlier), None);
    }

    #[test]
    fn test_future_and_past() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        assert!(is_future_at(later, now));
        assert!(!is_future_at(now, now));
        assert!(is_past_at(now, later));
        assert!(!is_past_at(now, now));
    }
}

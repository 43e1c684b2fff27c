//! Timestamp parsing for command-line input.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an RFC 3339 instant, or a zone-less date-time interpreted in `tz`.
pub fn parse_timestamp_in<Tz: TimeZone>(s: &str, tz: &Tz) -> AppResult<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            // DST gaps have no local reading; overlaps take the earlier one.
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset())
                .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()));
        }
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

/// Same as `parse_timestamp_in`, using the machine's local zone.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<FixedOffset>> {
    parse_timestamp_in(s, &Local)
}

pub fn now_fixed() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Optional `--now` value as an instant in the machine's zone.
///
/// Day and hour boundaries have to follow the zone's rules (DST included)
/// for every entry, so the result is never collapsed to today's offset.
pub fn parse_optional_local(input: Option<&String>) -> AppResult<DateTime<Local>> {
    match input {
        Some(s) => Ok(parse_timestamp(s)?.with_timezone(&Local)),
        None => Ok(Local::now()),
    }
}

/// Optional `--at` value, defaulting to `default`.
pub fn parse_optional_timestamp(
    input: Option<&String>,
    default: DateTime<FixedOffset>,
) -> AppResult<DateTime<FixedOffset>> {
    match input {
        Some(s) => parse_timestamp(s),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn rfc3339_keeps_its_offset() {
        let dt = parse_timestamp_in("2025-06-01T08:30:00-04:00", &jst()).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(dt.to_rfc3339(), "2025-06-01T08:30:00-04:00");
    }

    #[test]
    fn zoneless_input_uses_given_zone() {
        let dt = parse_timestamp_in("2025-06-01T08:30", &jst()).unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-06-01T08:30:00+09:00");

        let dt = parse_timestamp_in("2025-06-01 23:59:10", &jst()).unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-06-01T23:59:10+09:00");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            parse_timestamp_in("tomorrow", &jst()),
            Err(AppError::InvalidTimestamp(_))
        ));
        assert!(parse_timestamp_in("2025-13-01T00:00", &jst()).is_err());
    }

    #[test]
    fn local_now_keeps_the_instant() {
        let input = "2025-06-01T08:30:00+09:00".to_string();
        let now = parse_optional_local(Some(&input)).unwrap();
        assert_eq!(now.timestamp(), parse_timestamp(&input).unwrap().timestamp());
        assert!(parse_optional_local(Some(&"soon".to_string())).is_err());
    }

    #[test]
    fn missing_value_uses_default() {
        let default = jst().with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_optional_timestamp(None, default).unwrap(), default);
    }
}

//! Expiration window math for share links.
//!
//! The remote protocol carries expiration as a relative duration in whole
//! seconds, with `0` meaning "no expiration". These helpers convert the
//! absolute instants callers work with into that wire encoding.

use chrono::{DateTime, Utc};

/// Seconds from now until `target`, rounded down.
///
/// A past `target` yields a negative value; callers must reject
/// non-positive results before putting them on the wire, since zero is
/// reserved for "never expires". Depends on the wall clock, so two calls
/// with the same `target` can differ.
pub fn seconds_until(target: DateTime<Utc>) -> i64 {
    seconds_between(Utc::now(), target)
}

/// Seconds from `from` until `target`, rounded down.
pub fn seconds_between(from: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    (target - from).num_milliseconds().div_euclid(1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_seconds_between_exact_hour() {
        let from = Utc.with_ymd_and_hms(2025, 11, 2, 12, 0, 0).unwrap();
        let target = from + Duration::milliseconds(3_600_000);
        assert_eq!(seconds_between(from, target), 3600);
    }

    #[test]
    fn test_seconds_between_rounds_down() {
        let from = Utc.with_ymd_and_hms(2025, 11, 2, 12, 0, 0).unwrap();
        assert_eq!(seconds_between(from, from + Duration::milliseconds(1999)), 1);
        assert_eq!(seconds_between(from, from + Duration::milliseconds(999)), 0);
    }

    #[test]
    fn test_seconds_between_past_target_is_negative() {
        let from = Utc.with_ymd_and_hms(2025, 11, 2, 12, 0, 0).unwrap();
        let target = from - Duration::minutes(5);
        assert_eq!(seconds_between(from, target), -300);
    }

    #[test]
    fn test_seconds_until_tracks_wall_clock() {
        let target = Utc::now() + Duration::milliseconds(3_600_000);
        let seconds = seconds_until(target);
        // Allow for the time between computing `target` and sampling "now"
        assert!((3599..=3600).contains(&seconds), "got {}", seconds);
    }
}

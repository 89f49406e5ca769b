//! Text formatting helpers shared by the feed renderers.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format the time elapsed between `instant` and `now` as a coarse label.
///
/// Whole seconds are floored into the largest unit that keeps the value
/// below the next threshold: `"42s"`, `"5m"`, `"3h"`, `"2d"`. Instants in
/// the future are clamped to `"0s"`.
pub fn elapsed(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - instant).num_seconds().max(0);

    if secs < MINUTE {
        format!("{}s", secs)
    } else if secs < HOUR {
        format!("{}m", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h", secs / HOUR)
    } else {
        format!("{}d", secs / DAY)
    }
}

/// Format a count with `,` thousands separators (`28900` -> `"28,900"`).
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn ago(secs: i64) -> String {
        elapsed(now() - Duration::seconds(secs), now())
    }

    #[test]
    fn test_elapsed_seconds() {
        assert_eq!(ago(0), "0s");
        assert_eq!(ago(59), "59s");
    }

    #[test]
    fn test_elapsed_minutes_floor() {
        assert_eq!(ago(60), "1m");
        assert_eq!(ago(90), "1m");
        assert_eq!(ago(3599), "59m");
    }

    #[test]
    fn test_elapsed_hours_floor() {
        assert_eq!(ago(3600), "1h");
        assert_eq!(ago(7200), "2h");
        assert_eq!(ago(86399), "23h");
    }

    #[test]
    fn test_elapsed_days_floor() {
        assert_eq!(ago(86400), "1d");
        assert_eq!(ago(172800), "2d");
        assert_eq!(ago(172800 + 86399), "2d");
    }

    #[test]
    fn test_elapsed_future_clamps_to_zero() {
        assert_eq!(elapsed(now() + Duration::seconds(30), now()), "0s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(612), "612");
        assert_eq!(format_count(1200), "1,200");
        assert_eq!(format_count(28900), "28,900");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}

//! Humanized relative time ("3 minutes ago", "in about 2 hours").

use chrono::{DateTime, Datelike, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Distance between `ts` and `now` in words, with an "ago"/"in" suffix.
pub fn time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = distance_in_words(ts, now);
    if ts > now {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// Distance between two instants in words, direction-agnostic.
pub fn distance_in_words(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        }
    } else if minutes < 45 {
        format!("{minutes} minutes")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {} hours", round_div(minutes, 60))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        format!("{} days", round_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        plural("about ", round_div(minutes, MINUTES_IN_MONTH), "month")
    } else {
        let months = calendar_months(earlier, later);
        if months < 12 {
            plural("", round_div(minutes, MINUTES_IN_MONTH), "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => plural("about ", years, "year"),
                3..=8 => plural("over ", years, "year"),
                _ => plural("almost ", years + 1, "year"),
            }
        }
    }
}

fn plural(prefix: &str, n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{n} {unit}s")
    }
}

/// Non-negative integer division rounding half up.
fn round_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}

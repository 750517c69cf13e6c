//! Permissive date parsing for feed rows
//!
//! Spreadsheet exports carry dates in whatever convention the editor used.
//! Resolution order, first success wins:
//!
//! 1. Unambiguous formats: RFC 3339, RFC 2822, ISO dates and date-times,
//!    English month names.
//! 2. Slash dates. A four-digit first part means year/month/day. Otherwise
//!    day/month/year, so `03/04/2024` is 3 April. When the middle part
//!    cannot be a month but the first can, the date is month/day/year:
//!    `2/15/2024` is 15 February. Parts are read like JavaScript's
//!    `parseInt` and two-digit years mean 2000+year.
//!    Months outside 1-12 or days outside 1-31 reject the date; a day past
//!    the end of its month rolls into the next month.
//! 3. The caller's "now".
//!
//! Dates without an explicit offset are interpreted in local time, except
//! bare ISO dates which are UTC midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

/// Placeholder the feed uses for missing cells
const NOT_AVAILABLE: &str = "N/A";

const LOCAL_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const NAMED_MONTH_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%d %b, %Y",
];

/// Parse a feed date cell into epoch milliseconds, falling back to `now_millis`
#[must_use]
pub fn parse_feed_date(raw: &str, now_millis: i64) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        return now_millis;
    }

    parse_date(trimmed).unwrap_or_else(|| {
        log::debug!("unparseable feed date {trimmed:?}, using current time");
        now_millis
    })
}

/// Parse a date string into epoch milliseconds
#[must_use]
pub fn parse_date(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    parse_unambiguous(trimmed).or_else(|| parse_slashed(trimmed))
}

/// Formats whose field order cannot be misread
fn parse_unambiguous(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    for format in LOCAL_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return local_millis(naive);
        }
    }
    for format in NAMED_MONTH_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return local_millis(date.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

/// Slash date with each part read like JavaScript's `parseInt`
fn parse_slashed(s: &str) -> Option<i64> {
    let parts: Vec<&str> = s.split('/').collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };

    let first = parse_leading_int(first)?;
    let second = parse_leading_int(second)?;
    let third = parse_leading_int(third)?;

    let (year, month, day) = if first >= 1000 {
        (first, second, third)
    } else {
        let year = if (0..100).contains(&third) { third + 2000 } else { third };
        if second <= 12 || first > 12 {
            (year, second, first)
        } else {
            (year, first, second)
        }
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let date = rolled_date(i32::try_from(year).ok()?, month, day)?;
    local_millis(date.and_hms_opt(0, 0, 0)?)
}

/// Calendar date where a day past the end of the month rolls forward
///
/// `2024-02-31` is 2 March. The month must already be in range.
fn rolled_date(year: i32, month: i64, day: i64) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, 1)?;
    first_of_month.checked_add_signed(TimeDelta::try_days(day - 1)?)
}

/// Leading integer of a string, ignoring leading whitespace and trailing junk
///
/// `"2024 10:30"` is 2024, `"abc"` is `None`.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

fn local_millis(naive: NaiveDateTime) -> Option<i64> {
    let local = Local.from_local_datetime(&naive);
    local
        .earliest()
        .or_else(|| local.latest())
        .map(|dt| dt.timestamp_millis())
}

//! Tests for feed date parsing
//!
//! Local-time results are checked against chrono's own local conversion so
//! the tests hold in any time zone.

use chrono::{Local, NaiveDate, TimeZone, Utc};
use test_case::test_case;
use verisense::core::services::{parse_date, parse_feed_date};

const NOW: i64 = 1_700_000_000_000;

fn local_midnight(year: i32, month: u32, day: u32) -> i64 {
    let naive = NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap();
    Local.from_local_datetime(&naive).earliest().unwrap().timestamp_millis()
}

// =============================================================================
// Day-first slash dates
// =============================================================================

#[test_case("15/02/2024", (2024, 2, 15) ; "unambiguous day first")]
#[test_case("03/04/2024", (2024, 4, 3) ; "ambiguous read as day first")]
#[test_case("1/2/24", (2024, 2, 1) ; "short year")]
#[test_case("31/02/2024", (2024, 3, 2) ; "day overflow rolls into march")]
#[test_case("15/02/2024 10:30", (2024, 2, 15) ; "trailing time ignored")]
fn slash_dates(raw: &str, (year, month, day): (i32, u32, u32)) {
    assert_eq!(parse_date(raw), Some(local_midnight(year, month, day)));
}

#[test_case("2/15/2024", (2024, 2, 15) ; "us export")]
#[test_case("12/31/2024", (2024, 12, 31) ; "us year end")]
#[test_case("01/13/2024", (2024, 1, 13) ; "padded us date")]
fn month_first_when_middle_exceeds_twelve(raw: &str, (year, month, day): (i32, u32, u32)) {
    assert_eq!(parse_date(raw), Some(local_midnight(year, month, day)));
}

#[test_case("2024/02/15" ; "padded")]
#[test_case("2024/2/15" ; "unpadded")]
fn year_first_slash_dates(raw: &str) {
    assert_eq!(parse_date(raw), Some(local_midnight(2024, 2, 15)));
}

#[test_case("13/13/2024" ; "no valid month either way")]
#[test_case("2024/15/02" ; "year first with month fifteen")]
#[test_case("15/0/2024" ; "month zero")]
fn impossible_slash_dates_are_rejected(raw: &str) {
    assert_eq!(parse_date(raw), None);
    assert_eq!(parse_feed_date(raw, NOW), NOW);
}

// =============================================================================
// Unambiguous formats
// =============================================================================

#[test]
fn iso_date_is_utc_midnight() {
    let expected = Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).single().unwrap().timestamp_millis();
    assert_eq!(parse_date("2024-02-15"), Some(expected));
}

#[test]
fn rfc3339_keeps_its_offset() {
    let expected = Utc.with_ymd_and_hms(2024, 2, 15, 4, 30, 0).single().unwrap().timestamp_millis();
    assert_eq!(parse_date("2024-02-15T10:00:00+05:30"), Some(expected));
}

#[test]
fn named_month_is_local() {
    assert_eq!(parse_date("February 15, 2024"), Some(local_midnight(2024, 2, 15)));
    assert_eq!(parse_date("15 Feb 2024"), Some(local_midnight(2024, 2, 15)));
}

// =============================================================================
// Fallback
// =============================================================================

#[test_case("" ; "empty")]
#[test_case("N/A" ; "placeholder")]
#[test_case("sometime last week" ; "prose")]
#[test_case("15/02" ; "two parts")]
#[test_case("aa/bb/cc" ; "non numeric parts")]
fn falls_back_to_now(raw: &str) {
    assert_eq!(parse_feed_date(raw, NOW), NOW);
}

#[test]
fn surrounding_whitespace_ignored() {
    assert_eq!(parse_feed_date("  2024-02-15 ", NOW), parse_date("2024-02-15").unwrap());
}

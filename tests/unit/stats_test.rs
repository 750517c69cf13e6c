//! Tests for dashboard aggregates and feed filters

use chrono::{Local, TimeZone};
use verisense::core::models::VerificationStatus;
use verisense::core::services::stats::{city_hotspots, daily_activity, status_breakdown};
use verisense::core::services::{ClaimFilter, StatusCounts, parse_feed};

use crate::common::{SAMPLE_FEED, claim};

fn local_noon(year: i32, month: u32, day: u32) -> i64 {
    Local.with_ymd_and_hms(year, month, day, 12, 0, 0).single().unwrap().timestamp_millis()
}

// =============================================================================
// Counts
// =============================================================================

#[test]
fn tally_sample_feed() {
    let claims = parse_feed(SAMPLE_FEED, 0);
    let counts = StatusCounts::tally(&claims);

    assert_eq!(
        counts,
        StatusCounts {
            total: 4,
            verified: 1,
            false_claims: 1,
            misleading: 1,
            pending: 1,
        }
    );
}

#[test]
fn counts_serialize_false_key() {
    let json = serde_json::to_value(StatusCounts::default()).unwrap();
    assert!(json.get("false").is_some());
    assert!(json.get("false_claims").is_none());
}

#[test]
fn breakdown_skips_zero_slices() {
    let counts = StatusCounts {
        total: 3,
        verified: 0,
        false_claims: 2,
        misleading: 1,
        pending: 0,
    };
    let names: Vec<String> = status_breakdown(&counts).into_iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["False", "Misleading"]);
}

#[test]
fn breakdown_placeholder_when_idle() {
    let slices = status_breakdown(&StatusCounts::default());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].name, "System Idle");
    assert_eq!(slices[0].count, 1);
}

// =============================================================================
// Hotspots
// =============================================================================

#[test]
fn hotspots_merge_aliases_busiest_first() {
    let claims = parse_feed(SAMPLE_FEED, 0);
    let hotspots = city_hotspots(&claims);

    assert_eq!(hotspots[0].name, "Mumbai");
    assert_eq!(hotspots[0].count, 2);
    let names: Vec<&str> = hotspots.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Mumbai", "Cochin", "Unknown"]);
}

#[test]
fn hotspots_placeholder_when_empty() {
    let hotspots = city_hotspots(&[]);
    assert_eq!(hotspots.len(), 1);
    assert_eq!(hotspots[0].name, "No Data");
    assert_eq!(hotspots[0].count, 0);
}

// =============================================================================
// Activity
// =============================================================================

#[test]
fn activity_buckets_by_local_day_in_time_order() {
    let claims = vec![
        claim("later", "Mumbai", VerificationStatus::False, local_noon(2024, 2, 16)),
        claim("first", "Mumbai", VerificationStatus::False, local_noon(2024, 2, 15)),
        claim("same day", "Cochin", VerificationStatus::Verified, local_noon(2024, 2, 16) + 1_000),
    ];
    let activity = daily_activity(&claims, 0);

    assert_eq!(activity.len(), 2);
    assert_eq!(activity[0].name, "15 Feb");
    assert_eq!(activity[0].count, 1);
    assert_eq!(activity[1].name, "16 Feb");
    assert_eq!(activity[1].count, 2);
}

#[test]
fn activity_placeholder_is_today() {
    let today = local_noon(2024, 3, 1);
    let activity = daily_activity(&[], today);
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].name, "1 Mar");
    assert_eq!(activity[0].count, 0);
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn filter_by_city_substring() {
    let claims = parse_feed(SAMPLE_FEED, 0);
    let filter = ClaimFilter {
        city: Some("mum".to_string()),
        ..ClaimFilter::default()
    };
    let matched = filter.apply(&claims);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].text, "Free rations from Monday");
}

#[test]
fn all_india_matches_everything() {
    let claims = parse_feed(SAMPLE_FEED, 0);
    let filter = ClaimFilter {
        city: Some("All India".to_string()),
        ..ClaimFilter::default()
    };
    assert_eq!(filter.apply(&claims).len(), claims.len());
}

#[test]
fn filter_by_status_and_search() {
    let claims = parse_feed(SAMPLE_FEED, 0);
    let filter = ClaimFilter {
        city: None,
        status: Some(VerificationStatus::False),
        search: Some("BRIDGE".to_string()),
    };
    let matched = filter.apply(&claims);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].city, "Kochi");

    let none = ClaimFilter {
        status: Some(VerificationStatus::Verified),
        search: Some("bridge".to_string()),
        ..ClaimFilter::default()
    };
    assert!(none.apply(&claims).is_empty());
}

#[test]
fn search_covers_city() {
    let claims = parse_feed(SAMPLE_FEED, 0);
    let filter = ClaimFilter {
        search: Some("bombay".to_string()),
        ..ClaimFilter::default()
    };
    assert_eq!(filter.apply(&claims).len(), 1);
}

//! Dashboard aggregates over a claim collection
//!
//! Read-only views consumed by charts: status counts, city hotspots and a
//! per-day activity series, plus the filter the feed view applies.

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::core::models::{City, Claim, VerificationStatus};

/// Claim counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// All claims
    pub total: usize,
    /// Verified claims
    pub verified: usize,
    /// False claims
    #[serde(rename = "false")]
    pub false_claims: usize,
    /// Misleading claims
    pub misleading: usize,
    /// Everything else
    pub pending: usize,
}

impl StatusCounts {
    /// Count claims by status
    #[must_use]
    pub fn tally<'a>(claims: impl IntoIterator<Item = &'a Claim>) -> Self {
        let mut counts = Self::default();
        for claim in claims {
            counts.total += 1;
            match claim.status {
                VerificationStatus::Verified => counts.verified += 1,
                VerificationStatus::False => counts.false_claims += 1,
                VerificationStatus::Misleading => counts.misleading += 1,
                VerificationStatus::Pending => {},
            }
        }
        counts.pending = counts.total - (counts.verified + counts.false_claims + counts.misleading);
        counts
    }
}

/// A named count, one bar or point of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Label
    pub name: String,
    /// Count
    pub count: usize,
}

impl Bucket {
    fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Pie slices for the status chart
///
/// Pending claims are not charted. An empty collection yields a single
/// "System Idle" slice so the chart keeps its shape.
#[must_use]
pub fn status_breakdown(counts: &StatusCounts) -> Vec<Bucket> {
    if counts.total == 0 {
        return vec![Bucket::new("System Idle", 1)];
    }
    [
        (VerificationStatus::False, counts.false_claims),
        (VerificationStatus::Verified, counts.verified),
        (VerificationStatus::Misleading, counts.misleading),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(status, count)| Bucket::new(status.as_str(), count))
    .collect()
}

/// Canonical spelling of a free-text city
///
/// Known aliases collapse (Kochi and Ernakulam are Cochin, Bombay is Mumbai,
/// Kovai is Coimbatore, Pondicherry is Puducherry); placeholders become
/// "Unknown"; anything else gets an upper-case first letter.
#[must_use]
pub fn normalize_city(city: &str) -> String {
    let trimmed = city.trim();
    let lowered = trimmed.to_lowercase();

    let alias = if ["cochin", "kochi", "ernakulam"].iter().any(|a| lowered.contains(a)) {
        Some(City::Cochin.as_str())
    } else if ["mumbai", "bombay"].iter().any(|a| lowered.contains(a)) {
        Some(City::Mumbai.as_str())
    } else if ["coimbatore", "kovai"].iter().any(|a| lowered.contains(a)) {
        Some(City::Coimbatore.as_str())
    } else if ["puducherry", "pondicherry"].iter().any(|a| lowered.contains(a)) {
        Some("Puducherry")
    } else if matches!(lowered.as_str(), "" | "n/a" | "unknown" | "nan") {
        Some("Unknown")
    } else {
        None
    };

    alias.map_or_else(
        || {
            let mut chars = trimmed.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        },
        String::from,
    )
}

/// Claims per normalized city, busiest first
///
/// Ties keep first-seen order. An empty collection yields a single
/// "No Data" bucket.
#[must_use]
pub fn city_hotspots(claims: &[Claim]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    for claim in claims {
        let city = normalize_city(&claim.city);
        match buckets.iter_mut().find(|b| b.name == city) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(Bucket::new(city, 1)),
        }
    }

    if buckets.is_empty() {
        return vec![Bucket::new("No Data", 0)];
    }
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

/// Claims per local calendar day, oldest first, labelled like "15 Feb"
///
/// An empty collection yields a zero bucket for `today_millis`.
#[must_use]
pub fn daily_activity(claims: &[Claim], today_millis: i64) -> Vec<Bucket> {
    let mut sorted: Vec<&Claim> = claims.iter().collect();
    sorted.sort_by_key(|claim| claim.timestamp);

    let mut buckets: Vec<Bucket> = Vec::new();
    for label in sorted.iter().filter_map(|claim| day_label(claim.timestamp)) {
        match buckets.iter_mut().find(|b| b.name == label) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(Bucket::new(label, 1)),
        }
    }

    if buckets.is_empty() {
        return vec![Bucket::new(day_label(today_millis).unwrap_or_default(), 0)];
    }
    buckets
}

fn day_label(millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%-d %b").to_string())
}

/// Feed filter: city, status and free-text search, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimFilter {
    /// City substring; "All India" matches everything
    pub city: Option<String>,
    /// Exact status
    pub status: Option<VerificationStatus>,
    /// Case-insensitive search over claim text and city
    pub search: Option<String>,
}

impl ClaimFilter {
    /// Whether a claim passes every set criterion
    #[must_use]
    pub fn matches(&self, claim: &Claim) -> bool {
        let city_ok = self.city.as_deref().is_none_or(|city| {
            city == City::AllIndia.as_str()
                || claim.city.to_lowercase().contains(&city.to_lowercase())
        });
        let status_ok = self.status.is_none_or(|status| claim.status == status);
        let search_ok = self.search.as_deref().is_none_or(|query| {
            let query = query.to_lowercase();
            claim.text.to_lowercase().contains(&query) || claim.city.to_lowercase().contains(&query)
        });
        city_ok && status_ok && search_ok
    }

    /// Claims passing the filter, in collection order
    #[must_use]
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|claim| self.matches(claim)).collect()
    }
}

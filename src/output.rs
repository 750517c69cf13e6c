//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{Local, TimeZone};
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::config::Config;
use crate::core::models::{Claim, VerificationStatus};
use crate::core::services::stats::{self, Bucket, StatusCounts};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colored label for a status
#[must_use]
pub fn status_badge(status: VerificationStatus) -> ColoredString {
    let label = format!("[{}]", status.as_str().to_uppercase());
    match status {
        VerificationStatus::Verified => label.green().bold(),
        VerificationStatus::False => label.red().bold(),
        VerificationStatus::Misleading => label.yellow().bold(),
        VerificationStatus::Pending => label.dimmed(),
    }
}

/// Local date of a claim, like "15 Feb 2024"
#[must_use]
pub fn format_date(millis: i64) -> String {
    Local
        .timestamp_millis_opt(millis)
        .earliest()
        .map_or_else(|| "unknown date".to_string(), |dt| dt.format("%-d %b %Y").to_string())
}

fn print_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// Verdict
// =============================================================================

/// Result of a verify operation
#[derive(Debug, Serialize)]
pub struct VerdictReport {
    /// The recorded claim
    pub claim: Claim,
}

impl VerdictReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let claim = &self.claim;
        println!("{} {}", status_badge(claim.status), claim.text.bold());
        if let Some(score) = claim.confidence_score {
            println!("Confidence: {:.0}%", score * 100.0);
        }
        if let (Some(kind), Some(name)) = (claim.attachment_type, &claim.attachment_name) {
            println!("Attachment: {name} ({kind})");
        }
        match claim.source_url() {
            Some(url) => println!("Source: {}", url.underline()),
            None => println!("Source: {}", claim.source),
        }
        println!();
        println!("{}", claim.explanation);
    }
}

// =============================================================================
// Feed
// =============================================================================

/// Result of a feed listing
#[derive(Debug, Serialize)]
pub struct FeedReport {
    /// Claims in the feed before filtering
    pub total: usize,
    /// Claims shown, in feed order
    pub claims: Vec<Claim>,
}

impl FeedReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.total == 0 {
            println!("The community feed is empty or unavailable.");
            return;
        }
        if self.claims.is_empty() {
            println!("No claims match ({} in feed).", self.total);
            return;
        }

        println!("Showing {} of {} claim(s):\n", self.claims.len(), self.total);
        for claim in &self.claims {
            println!("  {} {}", status_badge(claim.status), claim.text);
            println!(
                "          {} · {} · {}",
                claim.city,
                format_date(claim.timestamp),
                claim.source_url().unwrap_or(&claim.source)
            );
            if let Some(truth) = &claim.truth_english {
                println!("          {}", truth.italic());
            }
            println!();
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Dashboard aggregates over a set of claims
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Counts per status
    pub counts: StatusCounts,
    /// Status chart slices
    pub breakdown: Vec<Bucket>,
    /// Claims per city, busiest first
    pub hotspots: Vec<Bucket>,
    /// Claims per day, oldest first
    pub activity: Vec<Bucket>,
}

impl StatsReport {
    /// Compute every aggregate for a claim set
    #[must_use]
    pub fn from_claims(claims: &[Claim], today_millis: i64) -> Self {
        let counts = StatusCounts::tally(claims);
        Self {
            counts,
            breakdown: stats::status_breakdown(&counts),
            hotspots: stats::city_hotspots(claims),
            activity: stats::daily_activity(claims, today_millis),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let counts = &self.counts;
        println!("Claims: {}", counts.total);
        println!("  {} {}", status_badge(VerificationStatus::Verified), counts.verified);
        println!("  {} {}", status_badge(VerificationStatus::False), counts.false_claims);
        println!("  {} {}", status_badge(VerificationStatus::Misleading), counts.misleading);
        println!("  {} {}", status_badge(VerificationStatus::Pending), counts.pending);

        println!("\nHotspots:");
        print_buckets(&self.hotspots);
        println!("\nActivity:");
        print_buckets(&self.activity);
    }
}

fn print_buckets(buckets: &[Bucket]) {
    let width = buckets.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
    for bucket in buckets {
        println!("  {:<width$}  {:>4}  {}", bucket.name, bucket.count, "█".repeat(bucket.count.min(40)));
    }
}

// =============================================================================
// Config
// =============================================================================

/// The effective configuration and where it came from
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// Config file consulted
    pub path: String,
    /// Whether that file exists
    pub exists: bool,
    /// Effective values after environment overrides
    pub config: Config,
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.exists {
            println!("Config file: {}\n", self.path);
        } else {
            println!("Config file: {} (not found, using defaults)\n", self.path);
        }
        match self.config.to_toml() {
            Ok(text) => print!("{text}"),
            Err(err) => println!("(could not serialize config: {err})"),
        }
    }
}

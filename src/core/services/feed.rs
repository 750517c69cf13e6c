//! Feed normalizer - map the published spreadsheet onto [`Claim`]s
//!
//! Columns are found by header name, so the sheet may reorder or drop
//! columns. A missing column, a short row or a blank cell reads as `"N/A"`.
//! A cell holding only whitespace counts as blank and also reads as `"N/A"`,
//! never as an empty string.
//! The feed is supplementary: nothing here ever fails, the worst case is an
//! empty collection.

use super::csv::parse_line;
use super::dates::parse_feed_date;
use crate::core::models::{Claim, VerificationStatus};
use crate::core::ports::FeedSource;

/// Placeholder for absent cells
pub const NOT_AVAILABLE: &str = "N/A";

/// Area label for records imported from the feed
pub const FEED_AREA: &str = "Community Report";

/// Header names the feed is expected to carry
pub mod columns {
    /// Claim text
    pub const CLAIM: &str = "Claim";
    /// Free-form status
    pub const STATUS: &str = "Status";
    /// English truth statement
    pub const TRUTH_ENGLISH: &str = "Truth (English)";
    /// Native-language debunk
    pub const DEBUNK_NATIVE: &str = "Debunk (Native)";
    /// Where the claim was seen
    pub const SOURCE: &str = "Source";
    /// City
    pub const CITY: &str = "City";
    /// Report date
    pub const DATE: &str = "Date";
}

/// Position of each known column in the header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ColumnIndex {
    claim: Option<usize>,
    status: Option<usize>,
    truth_english: Option<usize>,
    debunk_native: Option<usize>,
    source: Option<usize>,
    city: Option<usize>,
    date: Option<usize>,
}

impl ColumnIndex {
    fn from_header(header: &[String]) -> Self {
        let find = |name: &str| header.iter().position(|h| h == name);
        Self {
            claim: find(columns::CLAIM),
            status: find(columns::STATUS),
            truth_english: find(columns::TRUTH_ENGLISH),
            debunk_native: find(columns::DEBUNK_NATIVE),
            source: find(columns::SOURCE),
            city: find(columns::CITY),
            date: find(columns::DATE),
        }
    }
}

/// Parse feed CSV text into claims, in file order
///
/// Lines may end in LF or CRLF. Fewer than two lines (header plus one row)
/// yields nothing. Blank lines are skipped but still count towards the row
/// number embedded in each id.
#[must_use]
pub fn parse_feed(text: &str, now_millis: i64) -> Vec<Claim> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> =
        text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect();

    let Some((header_line, rows)) = lines.split_first() else {
        return Vec::new();
    };
    if rows.is_empty() {
        return Vec::new();
    }

    let header: Vec<String> =
        parse_line(header_line).into_iter().map(|h| h.trim().to_string()).collect();
    let index = ColumnIndex::from_header(&header);

    rows.iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(row, line)| normalize_row(row, &parse_line(line), &index, now_millis))
        .collect()
}

/// Fetch and parse the feed, degrading to an empty collection on any failure
pub async fn load_feed<F>(source: &F, now_millis: i64) -> Vec<Claim>
where
    F: FeedSource + ?Sized,
{
    match source.fetch_csv().await {
        Ok(text) => {
            let claims = parse_feed(&text, now_millis);
            log::info!("loaded {} claim(s) from feed", claims.len());
            claims
        },
        Err(err) => {
            log::warn!("feed unavailable, continuing without it: {err:#}");
            Vec::new()
        },
    }
}

fn normalize_row(row: usize, cells: &[String], index: &ColumnIndex, now_millis: i64) -> Claim {
    let cell = |column: Option<usize>| {
        column
            .and_then(|i| cells.get(i))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string()
    };

    let truth_english = cell(index.truth_english);
    let debunk_native = cell(index.debunk_native);

    Claim {
        id: format!("csv-{row}-{now_millis}"),
        text: cell(index.claim),
        source: cell(index.source),
        city: cell(index.city),
        area: FEED_AREA.to_string(),
        status: VerificationStatus::from_upstream(&cell(index.status)),
        timestamp: parse_feed_date(&cell(index.date), now_millis),
        explanation: format!("{truth_english}\n\n{debunk_native}"),
        confidence_score: None,
        attachment_type: None,
        attachment_name: None,
        truth_english: Some(truth_english),
        debunk_native: Some(debunk_native),
        raw_analysis: None,
    }
}

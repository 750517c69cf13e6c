//! Feed source port
//!
//! Defines the interface for fetching the community feed spreadsheet.

use async_trait::async_trait;

/// Source of the published community feed
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the feed as CSV text
    ///
    /// Implementations return an error for transport failures and non-success
    /// statuses alike; callers treat both as "feed unavailable".
    async fn fetch_csv(&self) -> anyhow::Result<String>;
}

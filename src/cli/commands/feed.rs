//! Feed command - list claims from the community feed

use verisense::adapters::http::SheetClient;
use verisense::config::Config;
use verisense::core::models::VerificationStatus;
use verisense::core::services::ClaimFilter;
use verisense::output::{FeedReport, OutputMode};
use verisense::state::ClaimStore;

use super::now_millis;

/// Load the feed and print the claims passing the filter
pub async fn feed(
    config: &Config,
    city: Option<String>,
    status: Option<VerificationStatus>,
    search: Option<String>,
    limit: Option<usize>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let source = SheetClient::from_config(config)?;
    let mut store = ClaimStore::new(config.defaults.submission_defaults());
    store.load_feed(&source, now_millis()).await;

    let filter = ClaimFilter {
        city,
        status,
        search,
    };
    let claims = filter
        .apply(store.claims())
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    FeedReport {
        total: store.claims().len(),
        claims,
    }
    .render(mode);

    Ok(())
}

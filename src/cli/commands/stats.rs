//! Stats command - dashboard aggregates over the community feed

use verisense::adapters::http::SheetClient;
use verisense::config::Config;
use verisense::core::models::Claim;
use verisense::core::services::ClaimFilter;
use verisense::output::{OutputMode, StatsReport};
use verisense::state::ClaimStore;

use super::now_millis;

/// Load the feed and print status counts, hotspots and daily activity
pub async fn stats(config: &Config, city: Option<String>, mode: OutputMode) -> anyhow::Result<()> {
    let now = now_millis();
    let source = SheetClient::from_config(config)?;
    let mut store = ClaimStore::new(config.defaults.submission_defaults());
    store.load_feed(&source, now).await;

    let filter = ClaimFilter {
        city,
        ..ClaimFilter::default()
    };
    let claims: Vec<Claim> = filter.apply(store.claims()).into_iter().cloned().collect();

    StatsReport::from_claims(&claims, now).render(mode);
    Ok(())
}

//! HTTP adapters for the two external services
//!
//! Implements the core ports with `reqwest`:
//!
//! - [`webhook`] - `AnalysisService` over the automation webhook
//! - [`sheet`] - `FeedSource` over the published spreadsheet
//!
//! Both share one client built from [`HttpConfig`].

pub mod sheet;
pub mod webhook;

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use crate::config::HttpConfig;

pub use sheet::SheetClient;
pub use webhook::WebhookClient;

/// Build the shared HTTP client
///
/// A zero timeout disables the timeout.
pub fn build_client(settings: &HttpConfig) -> anyhow::Result<Client> {
    let mut builder = Client::builder().user_agent(settings.user_agent.as_str());
    if settings.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
    }
    builder.build().context("failed to build HTTP client")
}

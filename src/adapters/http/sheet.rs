//! Published spreadsheet client
//!
//! Implements `FeedSource` with a plain GET of the CSV export.

use anyhow::{Context, bail};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::core::ports::FeedSource;

/// Spreadsheet-backed feed source
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
    url: String,
}

impl SheetClient {
    /// Create a client for the given CSV export URL
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = super::build_client(&config.http)?;
        Ok(Self::new(client, config.endpoints.feed_url.clone()))
    }

    /// Target URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for SheetClient {
    async fn fetch_csv(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("feed returned {status}");
        }

        response.text().await.context("failed to read feed body")
    }
}

//! Analysis webhook client
//!
//! Implements `AnalysisService` with one POST per submission:
//!
//! - text only: JSON body `{"claim": "<text>"}`
//! - with a file: multipart form with `data` (the file) and `claim`

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::config::Config;
use crate::core::models::Submission;
use crate::core::ports::{AnalysisService, BodyReadError, HttpReply};

/// JSON body of a text-only submission
#[derive(Debug, Serialize)]
struct ClaimBody<'a> {
    claim: &'a str,
}

/// Webhook-backed analysis service
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    /// Create a client for the given webhook URL
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
        Ok(Self::new(client, config.endpoints.webhook_url.clone()))
    }

    /// Target URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnalysisService for WebhookClient {
    async fn submit(&self, submission: &Submission) -> anyhow::Result<HttpReply> {
        let request = self.client.post(&self.url);
        let request = match &submission.attachment {
            Some(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.media_type)
                    .with_context(|| format!("invalid media type {:?}", file.media_type))?;
                let form = Form::new()
                    .part("data", part)
                    .text("claim", submission.multipart_claim().to_string());
                log::debug!("posting multipart submission with {file:?}");
                request.multipart(form)
            },
            None => {
                log::debug!("posting text submission");
                request.json(&ClaimBody {
                    claim: &submission.text,
                })
            },
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.url))?;
        let status = response.status();
        let body = response.text().await.map_err(|err| BodyReadError {
            status: status.as_u16(),
            source: err.into(),
        })?;

        Ok(HttpReply {
            status: status.as_u16(),
            reason: status.canonical_reason().map(String::from),
            body,
        })
    }
}

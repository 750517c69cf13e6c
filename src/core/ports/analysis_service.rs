//! Analysis service port
//!
//! Defines the interface for sending a claim to the external analysis
//! webhook.

use async_trait::async_trait;
use thiserror::Error;

use super::super::models::Submission;

/// A completed HTTP exchange, successful or not
///
/// The body is kept as text whatever the status, so error reports can quote
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase, when known (e.g. "Bad Gateway")
    pub reason: Option<String>,
    /// Response body
    pub body: String,
}

impl HttpReply {
    /// Create a reply
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The status line arrived but the body could not be read
///
/// Adapters return this inside the `anyhow::Error` so callers can still
/// report the status.
#[derive(Debug, Error)]
#[error("failed to read response body (HTTP {status})")]
pub struct BodyReadError {
    /// HTTP status that preceded the failure
    pub status: u16,
    /// Underlying transport error
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// The external claim analysis service
///
/// Implementations perform exactly one request per call. An `Err` means the
/// exchange did not complete; non-success statuses come back as an
/// [`HttpReply`].
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Send a submission and return the raw reply
    async fn submit(&self, submission: &Submission) -> anyhow::Result<HttpReply>;
}

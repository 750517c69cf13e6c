//! Verdict model
//!
//! The normalized outcome of one webhook analysis, before it is turned into
//! a [`Claim`](super::Claim).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::VerificationStatus;

/// Confidence assigned to webhook verdicts
///
/// The analysis service does not report one; this is a fixed approximation,
/// not a measured value.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Upstream response kept for debug views
///
/// Never parsed again downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysis {
    /// HTTP status code of the webhook response
    pub status_code: u16,
    /// Response body exactly as received
    pub raw_body: String,
    /// The JSON value salvaged from the body
    pub parsed_json: Value,
}

/// A normalized webhook verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Mapped status
    pub status: VerificationStatus,
    /// Human-readable explanation, never empty
    pub explanation: String,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    /// Source URL reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// English truth statement, if the service sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truth_english: Option<String>,
    /// Native-language debunk, if the service sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debunk_native: Option<String>,
    /// Raw upstream response
    pub raw: RawAnalysis,
}

//! Webhook decoder - turn an analysis reply into a [`Verdict`]
//!
//! One request goes out through the [`AnalysisService`] port. A failed
//! exchange or a non-2xx status is a [`VerifyError::Service`]; a 2xx body
//! that cannot be salvaged into JSON is a [`VerifyError::Decode`]. Both
//! carry an excerpt of the raw body so a failure view can show it without
//! re-fetching.

use thiserror::Error;

use super::salvage::{self, SalvageError, excerpt};
use super::verdict::normalize_verdict;
use crate::core::models::{Submission, Verdict};
use crate::core::ports::{AnalysisService, BodyReadError, HttpReply};

/// Body prefix quoted in the service error summary
pub const STATUS_EXCERPT_CHARS: usize = 100;

/// Body prefix attached to every failure for debug views
pub const DEBUG_EXCERPT_CHARS: usize = 500;

/// Failures of the webhook path
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The request did not complete, or the service answered non-2xx
    #[error("Verification service error: {detail}\n\nRaw Response: {raw_excerpt}")]
    Service {
        /// HTTP status, absent when no status line arrived
        status: Option<u16>,
        /// Summary line
        detail: String,
        /// Leading part of the body, or "Empty"
        raw_excerpt: String,
    },

    /// The body held no salvageable JSON
    #[error("{source}\n\nRaw Response: {raw_excerpt}")]
    Decode {
        /// Why salvage failed
        source: SalvageError,
        /// Leading part of the body, or "Empty"
        raw_excerpt: String,
    },
}

impl VerifyError {
    /// HTTP status of the failed exchange, if there was one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => *status,
            Self::Decode { .. } => None,
        }
    }

    /// Raw body excerpt for debug display
    #[must_use]
    pub fn raw_excerpt(&self) -> &str {
        match self {
            Self::Service { raw_excerpt, .. } | Self::Decode { raw_excerpt, .. } => raw_excerpt,
        }
    }
}

/// Send a submission and normalize the reply
pub async fn verify_claim<S>(service: &S, submission: &Submission) -> Result<Verdict, VerifyError>
where
    S: AnalysisService + ?Sized,
{
    let reply = service.submit(submission).await.map_err(|err| VerifyError::Service {
        status: err.downcast_ref::<BodyReadError>().map(|e| e.status),
        detail: format!("request failed: {err:#}"),
        raw_excerpt: debug_excerpt(""),
    })?;

    log::debug!("raw webhook response body: {}", reply.body);
    decode_reply(&reply)
}

/// Decode a completed exchange
///
/// Pure: no I/O, no clock.
pub fn decode_reply(reply: &HttpReply) -> Result<Verdict, VerifyError> {
    if !reply.is_success() {
        let status_line = match reply.reason.as_deref() {
            Some(reason) => format!("{} {reason}", reply.status),
            None => reply.status.to_string(),
        };
        return Err(VerifyError::Service {
            status: Some(reply.status),
            detail: format!("{status_line} - {}", excerpt(&reply.body, STATUS_EXCERPT_CHARS)),
            raw_excerpt: debug_excerpt(&reply.body),
        });
    }

    let parsed = salvage::extract_json(&reply.body).map_err(|source| VerifyError::Decode {
        source,
        raw_excerpt: debug_excerpt(&reply.body),
    })?;

    Ok(normalize_verdict(parsed, reply.status, &reply.body))
}

fn debug_excerpt(body: &str) -> String {
    if body.is_empty() {
        "Empty".to_string()
    } else {
        excerpt(body, DEBUG_EXCERPT_CHARS)
    }
}

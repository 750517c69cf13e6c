//! JSON salvage - recover a JSON object from a noisy response body
//!
//! Automation webhooks sometimes wrap their JSON in HTML, logs or trailing
//! artifacts. The strict parse is tried first; on failure the span from the
//! first `{` to each `}` (last one first, scanning backward) is tried until
//! one parses.
//!
//! Garbage *inside* the object is not recovered. With two disjoint objects
//! in the body, the outer span fails and the scan falls through to the
//! first object.

use serde_json::Value;
use thiserror::Error;

/// How much of the raw text an [`SalvageError::UnparseableJson`] keeps
pub const RAW_START_CHARS: usize = 50;

/// Errors from [`extract_json`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalvageError {
    /// There is no `{` anywhere in the body
    #[error("No JSON object found in response (no opening brace).")]
    NoJsonFound,

    /// Every `{ ... }` candidate failed to parse
    #[error("Robust parsing failed. Could not extract valid JSON. Raw start: {raw_start}...")]
    UnparseableJson {
        /// First characters of the raw body
        raw_start: String,
    },
}

/// Extract the first structurally valid JSON value from `raw`
///
/// A body that is valid JSON as a whole is returned untouched, whatever its
/// type. Otherwise only object spans are considered.
pub fn extract_json(raw: &str) -> Result<Value, SalvageError> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }

    log::warn!("direct JSON parse failed, attempting salvage");

    let first = raw.find('{').ok_or(SalvageError::NoJsonFound)?;

    let mut close = raw.rfind('}');
    while let Some(end) = close.filter(|&end| end > first) {
        if let Ok(value) = serde_json::from_str(&raw[first..=end]) {
            log::debug!("salvaged JSON from byte range {first}..={end}");
            return Ok(value);
        }
        close = raw[..end].rfind('}');
    }

    Err(SalvageError::UnparseableJson {
        raw_start: excerpt(raw, RAW_START_CHARS),
    })
}

/// The first `max_chars` characters of `text`
///
/// Cuts on character boundaries, never inside a UTF-8 sequence.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

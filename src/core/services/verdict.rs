//! Verdict normalizer - map a decoded webhook payload onto a [`Verdict`]
//!
//! All recognized keys are optional. Values are coerced to strings the way a
//! loosely typed client would: `null`, `false`, `0` and `""` count as absent.

use serde_json::Value;

use crate::core::models::{DEFAULT_CONFIDENCE, RawAnalysis, Verdict, VerificationStatus};

/// Explanation used when the payload carries no usable text at all
pub const NO_DETAILS: &str = "Analysis complete (No details provided).";

/// Recognized payload keys
pub mod keys {
    /// Free-form status string
    pub const STATUS: &str = "status";
    /// English truth statement
    pub const TRUTH_ENGLISH: &str = "truth_english";
    /// Native-language debunk
    pub const DEBUNK_NATIVE: &str = "debunk_native";
    /// Fallback log text
    pub const VERIFICATION_LOG: &str = "verification_log";
    /// Audio transcript
    pub const TRANSCRIPT: &str = "transcript";
    /// Image analysis
    pub const IMAGE_ANALYSIS: &str = "image_analysis";
    /// Source link
    pub const SOURCE_URL: &str = "source_url";
}

/// Build a verdict from a salvaged payload
#[must_use]
pub fn normalize_verdict(parsed: Value, status_code: u16, raw_body: &str) -> Verdict {
    let field = |key: &str| parsed.get(key).and_then(coerce_field);

    let status = VerificationStatus::from_upstream(&field(keys::STATUS).unwrap_or_default());
    let truth_english = field(keys::TRUTH_ENGLISH);
    let debunk_native = field(keys::DEBUNK_NATIVE);
    let transcript = field(keys::TRANSCRIPT);
    let image_analysis = field(keys::IMAGE_ANALYSIS);

    let explanation = assemble_explanation(
        truth_english.as_deref(),
        debunk_native.as_deref(),
        transcript.as_deref(),
        image_analysis.as_deref(),
        field(keys::VERIFICATION_LOG).as_deref(),
    );
    let source = field(keys::SOURCE_URL);

    Verdict {
        status,
        explanation,
        confidence: DEFAULT_CONFIDENCE,
        source,
        truth_english,
        debunk_native,
        raw: RawAnalysis {
            status_code,
            raw_body: raw_body.to_string(),
            parsed_json: parsed,
        },
    }
}

/// Join the present sections into paragraphs, falling back to the log and
/// then to [`NO_DETAILS`]
fn assemble_explanation(
    truth_english: Option<&str>,
    debunk_native: Option<&str>,
    transcript: Option<&str>,
    image_analysis: Option<&str>,
    verification_log: Option<&str>,
) -> String {
    let parts: Vec<String> = [
        truth_english.map(|t| format!("🇬🇧 {t}")),
        debunk_native.map(|d| format!("🇮🇳 {d}")),
        transcript.map(|t| format!("📝 Transcript: {t}")),
        image_analysis.map(|i| format!("🖼️ Image Analysis: {i}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let joined = parts.join("\n\n");
    if joined.trim().is_empty() {
        verification_log
            .map(str::trim)
            .filter(|log| !log.is_empty())
            .unwrap_or(NO_DETAILS)
            .to_string()
    } else {
        joined.trim().to_string()
    }
}

/// Coerce a loosely typed payload value into text
///
/// Falsy values (`null`, `false`, `0`, `""`) are treated as absent. Arrays
/// join their elements with `,`; objects become compact JSON.
#[must_use]
pub fn coerce_field(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => String::new(),
                    Value::String(s) => s.clone(),
                    Value::Array(_) | Value::Object(_) => coerce_field(item).unwrap_or_default(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        )
        .filter(|joined| !joined.is_empty()),
        Value::Object(_) => Some(value.to_string()),
    }
}

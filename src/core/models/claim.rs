//! Claim model
//!
//! The canonical record both ingestion paths produce. Feed rows and
//! webhook submissions share this shape; provenance only shows through the
//! optional fields.

use serde::{Deserialize, Serialize};

use super::{AttachmentKind, RawAnalysis, Submission, SubmissionDefaults, Verdict, VerificationStatus};

/// Area label for records created from submissions
pub const SUBMISSION_AREA: &str = "General";

/// A verified (or pending) claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique within one collection
    pub id: String,

    /// The claim text
    pub text: String,

    /// A label such as "User Input", or a URL
    pub source: String,

    /// Free-text city
    pub city: String,

    /// Free-text area within the city
    pub area: String,

    /// Verdict
    pub status: VerificationStatus,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,

    /// Explanation, possibly several paragraphs
    #[serde(default)]
    pub explanation: String,

    /// Confidence in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,

    /// Kind of attached evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_type: Option<AttachmentKind>,

    /// Name of the attached file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,

    /// English truth statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truth_english: Option<String>,

    /// Debunk in the reader's language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debunk_native: Option<String>,

    /// Upstream response, for debug views only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_analysis: Option<RawAnalysis>,
}

impl Claim {
    /// Build the record for a freshly verified submission
    ///
    /// Empty text is replaced by `[Analyzed <file>]`, or `Empty Query` when
    /// there is no file either. The source is the reported URL when the
    /// service sent one, otherwise the default label.
    #[must_use]
    pub fn from_verdict(
        submission: &Submission,
        verdict: Verdict,
        defaults: &SubmissionDefaults,
        now_millis: i64,
    ) -> Self {
        let attachment = submission.attachment.as_ref();

        let text = if !submission.text.is_empty() {
            submission.text.clone()
        } else if let Some(file) = attachment {
            format!("[Analyzed {}]", file.file_name)
        } else {
            "Empty Query".to_string()
        };

        Self {
            id: now_millis.to_string(),
            text,
            source: verdict.source.unwrap_or_else(|| defaults.source.clone()),
            city: defaults.city.clone(),
            area: SUBMISSION_AREA.to_string(),
            status: verdict.status,
            timestamp: now_millis,
            explanation: verdict.explanation,
            confidence_score: Some(verdict.confidence),
            attachment_type: attachment.and_then(super::Attachment::kind),
            attachment_name: attachment.map(|file| file.file_name.clone()),
            truth_english: verdict.truth_english,
            debunk_native: verdict.debunk_native,
            raw_analysis: Some(verdict.raw),
        }
    }

    /// The source, when it is an HTTP(S) link rather than a label
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        let source = self.source.trim();
        (source.starts_with("http://") || source.starts_with("https://")).then_some(source)
    }
}

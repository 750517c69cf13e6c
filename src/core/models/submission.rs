//! Submission model
//!
//! What a user sends for verification: claim text, an optional attachment,
//! or both.

use super::{Attachment, City};

/// Claim text sent with a multipart upload when the user typed nothing
pub const DEFAULT_FILE_INSTRUCTION: &str = "Analyze this file";

/// A claim submitted for verification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Submission {
    /// Claim text, may be empty when an attachment substitutes for it
    pub text: String,
    /// Optional evidence file
    pub attachment: Option<Attachment>,
}

impl Submission {
    /// A text-only submission
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachment: None,
        }
    }

    /// Attach a file
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Whether there is anything to verify
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachment.is_none()
    }

    /// The `claim` field of a multipart upload
    #[must_use]
    pub fn multipart_claim(&self) -> &str {
        if self.text.is_empty() {
            DEFAULT_FILE_INSTRUCTION
        } else {
            &self.text
        }
    }
}

/// Values stamped on records created from submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDefaults {
    /// City recorded on the claim
    pub city: String,
    /// Source label used when the service reports no URL
    pub source: String,
}

impl Default for SubmissionDefaults {
    fn default() -> Self {
        Self {
            city: City::AllIndia.to_string(),
            source: "User Input".to_string(),
        }
    }
}

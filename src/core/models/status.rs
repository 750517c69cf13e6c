//! Verification status
//!
//! The closed set of verdicts a claim can carry.

use serde::{Deserialize, Serialize};

/// Verdict attached to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerificationStatus {
    /// The claim checks out
    Verified,
    /// The claim is false or fabricated
    False,
    /// The claim is partially true or lacks context
    Misleading,
    /// No usable verdict (yet)
    #[default]
    Pending,
}

impl VerificationStatus {
    /// All statuses, in dashboard order
    pub const ALL: [Self; 4] = [Self::Verified, Self::False, Self::Misleading, Self::Pending];

    /// Map a free-form upstream status string onto the closed set
    ///
    /// Matching is a case-insensitive substring test, first hit wins:
    /// `verified`/`true`, then `false`/`fake`, then `misleading`.
    /// Anything else, including the empty string, is `Pending`.
    #[must_use]
    pub fn from_upstream(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if lowered.contains("verified") || lowered.contains("true") {
            Self::Verified
        } else if lowered.contains("false") || lowered.contains("fake") {
            Self::False
        } else if lowered.contains("misleading") {
            Self::Misleading
        } else {
            Self::Pending
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::False => "False",
            Self::Misleading => "Misleading",
            Self::Pending => "Pending",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "false" => Ok(Self::False),
            "misleading" => Ok(Self::Misleading),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("Invalid status: {s}. Use: verified, false, misleading, pending")),
        }
    }
}

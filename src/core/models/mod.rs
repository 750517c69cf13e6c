//! Domain models for verisense
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Claim`] - The canonical record both ingestion paths produce
//! - [`VerificationStatus`] - Verified, False, Misleading or Pending
//! - [`Submission`] - What a user sends for verification
//! - [`Verdict`] - A normalized webhook result
//! - [`City`] - Cities the product reports on

mod attachment;
mod city;
mod claim;
mod status;
mod submission;
mod verdict;

pub use attachment::{Attachment, AttachmentKind};
pub use city::City;
pub use claim::{Claim, SUBMISSION_AREA};
pub use status::VerificationStatus;
pub use submission::{DEFAULT_FILE_INSTRUCTION, Submission, SubmissionDefaults};
pub use verdict::{DEFAULT_CONFIDENCE, RawAnalysis, Verdict};

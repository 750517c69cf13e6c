//! Application state
//!
//! [`ClaimStore`] owns the claim collection. It changes only through two
//! transitions:
//!
//! - [`ClaimStore::load_feed`] replaces the collection with a fresh feed
//!   import, unless the import came back empty
//! - [`ClaimStore::submit_claim`] verifies one submission and prepends the
//!   resulting record
//!
//! Both take `&mut self`, so one store never has two submissions in flight.

use crate::core::models::{Claim, Submission, SubmissionDefaults};
use crate::core::ports::{AnalysisService, FeedSource};
use crate::core::services::{VerifyError, feed, verify_claim};

/// In-memory claim collection, newest submission first
#[derive(Debug, Clone, Default)]
pub struct ClaimStore {
    claims: Vec<Claim>,
    defaults: SubmissionDefaults,
}

impl ClaimStore {
    /// Create an empty store
    #[must_use]
    pub const fn new(defaults: SubmissionDefaults) -> Self {
        Self {
            claims: Vec::new(),
            defaults,
        }
    }

    /// Current claims
    #[must_use]
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Values stamped on submitted claims
    #[must_use]
    pub const fn defaults(&self) -> &SubmissionDefaults {
        &self.defaults
    }

    /// Import the feed
    ///
    /// An empty import (fetch failure, header-only sheet) leaves the current
    /// collection untouched. Returns the number of records imported.
    pub async fn load_feed<F>(&mut self, source: &F, now_millis: i64) -> usize
    where
        F: FeedSource + ?Sized,
    {
        let imported = feed::load_feed(source, now_millis).await;
        let count = imported.len();
        if count > 0 {
            self.claims = imported;
        } else {
            log::debug!("feed import empty, keeping {} existing claim(s)", self.claims.len());
        }
        count
    }

    /// Verify a submission and record the result
    ///
    /// On failure the collection is unchanged.
    pub async fn submit_claim<S>(
        &mut self,
        service: &S,
        submission: Submission,
        now_millis: i64,
    ) -> Result<&Claim, VerifyError>
    where
        S: AnalysisService + ?Sized,
    {
        let verdict = verify_claim(service, &submission).await?;
        let claim = Claim::from_verdict(&submission, verdict, &self.defaults, now_millis);
        log::info!("claim {} verified as {}", claim.id, claim.status);
        self.claims.insert(0, claim);
        Ok(&self.claims[0])
    }
}

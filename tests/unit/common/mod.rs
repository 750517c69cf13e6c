//! Mock implementations of port traits for testing
//!
//! These mocks provide canned behavior for unit testing without real I/O.

use std::sync::Mutex;

use anyhow::bail;
use async_trait::async_trait;
use verisense::core::models::{Claim, Submission, VerificationStatus};
use verisense::core::ports::{AnalysisService, BodyReadError, FeedSource, HttpReply};

enum Behavior {
    Reply(HttpReply),
    Unreachable,
    BodyLost(u16),
}

/// Analysis service returning one canned reply and recording submissions
pub struct MockService {
    behavior: Behavior,
    seen: Mutex<Vec<Submission>>,
}

impl MockService {
    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with this status and body
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with(Behavior::Reply(HttpReply::new(status, body)))
    }

    /// Answer with a reason phrase as well
    pub fn replying_with_reason(status: u16, reason: &str, body: &str) -> Self {
        let mut reply = HttpReply::new(status, body);
        reply.reason = Some(reason.to_string());
        Self::with(Behavior::Reply(reply))
    }

    /// Never complete an exchange
    pub fn unreachable() -> Self {
        Self::with(Behavior::Unreachable)
    }

    /// Send a status line, then drop the connection mid-body
    pub fn losing_body_after(status: u16) -> Self {
        Self::with(Behavior::BodyLost(status))
    }

    /// Submissions received so far
    pub fn seen(&self) -> Vec<Submission> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisService for MockService {
    async fn submit(&self, submission: &Submission) -> anyhow::Result<HttpReply> {
        self.seen.lock().unwrap().push(submission.clone());
        match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Unreachable => bail!("connection refused"),
            Behavior::BodyLost(status) => Err(BodyReadError {
                status: *status,
                source: "connection reset by peer".into(),
            }
            .into()),
        }
    }
}

/// Feed source serving fixed CSV text, or failing
pub struct MockFeed {
    csv: Option<String>,
}

impl MockFeed {
    /// Serve this CSV
    pub fn serving(csv: &str) -> Self {
        Self {
            csv: Some(csv.to_string()),
        }
    }

    /// Fail every fetch
    pub fn offline() -> Self {
        Self { csv: None }
    }
}

#[async_trait]
impl FeedSource for MockFeed {
    async fn fetch_csv(&self) -> anyhow::Result<String> {
        match &self.csv {
            Some(csv) => Ok(csv.clone()),
            None => bail!("feed offline"),
        }
    }
}

/// A feed-style claim with the fields the aggregates look at
pub fn claim(text: &str, city: &str, status: VerificationStatus, timestamp: i64) -> Claim {
    Claim {
        id: format!("test-{timestamp}"),
        text: text.to_string(),
        source: "N/A".to_string(),
        city: city.to_string(),
        area: "Community Report".to_string(),
        status,
        timestamp,
        explanation: String::new(),
        confidence_score: None,
        attachment_type: None,
        attachment_name: None,
        truth_english: None,
        debunk_native: None,
        raw_analysis: None,
    }
}

/// The feed used by the dashboard scenarios
pub const SAMPLE_FEED: &str = "\
Claim,Status,Truth (English),Debunk (Native),Source,City,Date
Bridge collapsed in Kochi,FAKE,The bridge is intact.,പാലം സുരക്ഷിതമാണ്.,https://news.example/bridge,Kochi,15/02/2024
Free rations from Monday,Verified,Announced by the state.,N/A,Govt notice,Mumbai,16/02/2024
Salt water cures fever,misleading,No evidence.,,WhatsApp,Bombay,16/02/2024
Temple closed for a year,,,,,,
";

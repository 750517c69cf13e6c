//! Business logic services
//!
//! Decoding and normalization for both ingestion paths. Apart from the two
//! thin async entry points that call a port, everything here operates on
//! data passed in and returns results.
//!
//! - [`salvage`] - Recover a JSON object from a noisy response body
//! - [`verdict`] - Map a decoded payload onto a verdict
//! - [`webhook`] - Send a submission and decode the reply
//! - [`csv`] - Split one CSV line into fields
//! - [`dates`] - Permissive date parsing for feed rows
//! - [`feed`] - Map the published spreadsheet onto claims
//! - [`stats`] - Dashboard aggregates and feed filters

pub mod csv;
pub mod dates;
pub mod feed;
pub mod salvage;
pub mod stats;
pub mod verdict;
pub mod webhook;

pub use csv::parse_line;
pub use dates::{parse_date, parse_feed_date};
pub use feed::{load_feed, parse_feed};
pub use salvage::{SalvageError, extract_json};
pub use stats::{Bucket, ClaimFilter, StatusCounts};
pub use verdict::normalize_verdict;
pub use webhook::{VerifyError, decode_reply, verify_claim};

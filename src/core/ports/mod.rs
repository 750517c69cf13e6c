//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the two external services (analysis webhook, published feed).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. Tests substitute canned replies for the network.

mod analysis_service;
mod feed_source;

pub use analysis_service::{AnalysisService, BodyReadError, HttpReply};
pub use feed_source::FeedSource;

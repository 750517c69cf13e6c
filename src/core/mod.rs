//! Core domain logic for verisense
//!
//! This module contains the decoding and normalization pipeline. External
//! services are reached only through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Claim, VerificationStatus, Submission, Verdict)
//! - `services/` - Decoding, normalization and aggregation
//! - `ports/` - Trait definitions for the analysis webhook and the feed

pub mod models;
pub mod ports;
pub mod services;

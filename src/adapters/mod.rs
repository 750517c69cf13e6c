//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - `reqwest` clients for the analysis webhook and the feed

pub mod http;

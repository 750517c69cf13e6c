//! Command implementations

mod config;
mod feed;
mod stats;
mod verify;

pub use config::config;
pub use feed::feed;
pub use stats::stats;
pub use verify::verify;

/// Current time in milliseconds since the Unix epoch
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

//! Config command - show the effective configuration

use std::path::Path;

use verisense::config::Config;
use verisense::output::{ConfigReport, OutputMode};

/// Print the resolved configuration and the file it was read from
pub fn config(config: Config, path: &Path, mode: OutputMode) {
    ConfigReport {
        path: path.display().to_string(),
        exists: path.exists(),
        config,
    }
    .render(mode);
}

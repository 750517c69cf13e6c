//! Centralized path definitions for verisense
//!
//! The only on-disk state is the optional user configuration:
//!
//! ```text
//! ~/.config/verisense/
//! └── config.toml               # Endpoints, HTTP settings, submission defaults
//! ```
//!
//! On platforms without an XDG-style config directory the home directory
//! is used instead.

use std::path::PathBuf;

/// Application directory name under the config root
const APP_DIR: &str = "verisense";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global verisense directory.
///
/// Returns `~/.config/verisense/` (or the platform equivalent).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(APP_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/verisense/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

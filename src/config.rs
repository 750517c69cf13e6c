//! Configuration management
//!
//! Endpoints, HTTP settings and submission defaults. Everything has a
//! built-in default, so no file is required. Sources, lowest precedence
//! first:
//!
//! 1. Built-in defaults (the product's published endpoints)
//! 2. `~/.config/verisense/config.toml`, or the file passed with `--config`
//! 3. `VERISENSE_WEBHOOK_URL`, `VERISENSE_FEED_URL`, `VERISENSE_TIMEOUT_SECS`

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{City, SubmissionDefaults};
use crate::paths;

/// Analysis webhook of the hosted automation workflow
pub const DEFAULT_WEBHOOK_URL: &str = "https://mpskumar.app.n8n.cloud/webhook/verify";

/// Published community feed, exported as CSV
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTp1jvPycvCS5CFAcKD5bQplhrrgfYsp3ry7Sc2_ZmDVZHcGUa9Kv-9mq9TcgiI-f434FqvDI88XD_v/pub?output=csv";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable overriding the webhook URL
pub const ENV_WEBHOOK_URL: &str = "VERISENSE_WEBHOOK_URL";

/// Environment variable overriding the feed URL
pub const ENV_FEED_URL: &str = "VERISENSE_FEED_URL";

/// Environment variable overriding the request timeout
pub const ENV_TIMEOUT_SECS: &str = "VERISENSE_TIMEOUT_SECS";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// An environment override has an unusable value
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Full verisense configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote endpoints
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Values stamped on submitted claims
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Remote endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Analysis webhook (POST)
    pub webhook_url: String,
    /// Community feed CSV (GET)
    pub feed_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("verisense/{}", crate::VERSION),
        }
    }
}

/// Values stamped on records created from submissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// City recorded on submitted claims
    pub city: String,
    /// Source label when the service reports no URL
    pub source: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let defaults = SubmissionDefaults::default();
        Self {
            city: defaults.city,
            source: defaults.source,
        }
    }
}

impl DefaultsConfig {
    /// As the domain type
    #[must_use]
    pub fn submission_defaults(&self) -> SubmissionDefaults {
        SubmissionDefaults {
            city: if self.city.trim().is_empty() {
                City::AllIndia.to_string()
            } else {
                self.city.clone()
            },
            source: self.source.clone(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the default config file, falling back to defaults
    ///
    /// A missing file is normal. An unreadable or invalid one is logged and
    /// ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            log::warn!("{err}; using built-in defaults");
            Self::default()
        })
    }

    /// Load a specific config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist and parse. Environment overrides are
    /// applied last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => Self::load(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the environment)
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup(ENV_WEBHOOK_URL).filter(|v| !v.trim().is_empty()) {
            self.endpoints.webhook_url = url;
        }
        if let Some(url) = lookup(ENV_FEED_URL).filter(|v| !v.trim().is_empty()) {
            self.endpoints.feed_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.http.timeout_secs =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    name: ENV_TIMEOUT_SECS,
                    value,
                })?;
        }
        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

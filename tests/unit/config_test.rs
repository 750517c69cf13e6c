//! Tests for configuration loading

use std::fs;

use tempfile::TempDir;
use verisense::config::{
    Config, ConfigError, DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_WEBHOOK_URL,
    ENV_FEED_URL,
};

#[test]
fn defaults_point_at_product_endpoints() {
    let config = Config::default();
    assert_eq!(config.endpoints.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(config.endpoints.feed_url, DEFAULT_FEED_URL);
    assert_eq!(config.http.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(config.http.user_agent.starts_with("verisense/"));
    assert_eq!(config.defaults.city, "All India");
    assert_eq!(config.defaults.source, "User Input");
}

#[test]
fn load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[endpoints]
webhook_url = "http://127.0.0.1:8080/verify"

[http]
timeout_secs = 0

[defaults]
city = "Mumbai"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.endpoints.webhook_url, "http://127.0.0.1:8080/verify");
    assert_eq!(config.endpoints.feed_url, DEFAULT_FEED_URL);
    assert_eq!(config.http.timeout_secs, 0);
    assert_eq!(config.defaults.city, "Mumbai");
    assert_eq!(config.defaults.source, "User Input");
}

#[test]
fn missing_explicit_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load_from(&temp.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[http]\ntimeout_secs = \"soon\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn blank_override_is_ignored() {
    let mut config = Config::default();
    config
        .apply_overrides(|name| (name == ENV_FEED_URL).then(|| "  ".to_string()))
        .unwrap();
    assert_eq!(config.endpoints.feed_url, DEFAULT_FEED_URL);
}

#[test]
fn toml_round_trip() {
    let mut config = Config::default();
    config.defaults.city = "Coimbatore".to_string();

    let text = config.to_toml().unwrap();
    assert_eq!(Config::parse(&text).unwrap(), config);
}

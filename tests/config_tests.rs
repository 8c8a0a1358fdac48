//! Configuration file parsing.

use nps_sites::domain::error::SiteError;
use nps_sites::infrastructure::config::{parse_config, Config};

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.base_url, "https://www.nps.gov");
    assert_eq!(config.theme, "park");
    assert!(config.cache_file.is_none());
    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert!(config.nearby.api_key.is_none());
    assert_eq!(config.nearby.radius, 10);
    assert_eq!(config.nearby.max_matches, 10);
    assert_eq!(
        config.nearby.endpoint,
        "http://www.mapquestapi.com/search/v2/radius"
    );
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.base_url, "https://www.nps.gov");
    assert_eq!(config.nearby.radius, 10);
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
cache_file = "/tmp/nps-cache.json"
theme = "plain"

[logging]
enable = true
path = "/tmp/nps.log"
level = "DEBUG"

[nearby]
api_key = "secret"
radius = 25
"#;

    let config = parse_config(toml_content).unwrap();
    assert_eq!(config.cache_file.as_deref(), Some("/tmp/nps-cache.json"));
    assert_eq!(config.theme, "plain");
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/nps.log"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.nearby.require_api_key().unwrap(), "secret");
    assert_eq!(config.nearby.radius, 25);
    // unspecified keys keep their defaults
    assert_eq!(config.nearby.max_matches, 10);
}

#[test]
fn test_invalid_toml_is_error() {
    let err = parse_config("radius = = 3").unwrap_err();
    assert!(matches!(err, SiteError::Toml(_)));
}

#[test]
fn test_sample_config_roundtrip() {
    let sample = toml::to_string_pretty(&Config::default()).unwrap();
    let parsed = parse_config(&sample).unwrap();
    assert_eq!(parsed.base_url, Config::default().base_url);
    assert_eq!(parsed.nearby.radius, 10);
}

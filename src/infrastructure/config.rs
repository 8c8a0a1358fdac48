use crate::domain::error::SiteError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub cache_file: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub nearby: NearbyConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// MapQuest radius search settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NearbyConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default = "default_max_matches")]
    pub max_matches: u32,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            radius: default_radius(),
            max_matches: default_max_matches(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_file: None,
            theme: default_theme(),
            logging: Logging::default(),
            nearby: NearbyConfig::default(),
        }
    }
}

impl NearbyConfig {
    /// The configured key, or a `Config` error when it is missing or blank.
    pub fn require_api_key(&self) -> Result<&str, SiteError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(SiteError::Config(
                "MapQuest API key not configured (set nearby.api_key)".to_string(),
            )),
        }
    }
}

// Defaults
fn default_base_url() -> String {
    "https://www.nps.gov".to_string()
}
fn default_theme() -> String {
    "park".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_endpoint() -> String {
    "http://www.mapquestapi.com/search/v2/radius".to_string()
}
fn default_radius() -> u32 {
    10
}
fn default_max_matches() -> u32 {
    10
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nps-sites").join("config.toml"))
}

/// Cache file path: explicit config value, else the per-user cache directory.
pub fn get_cache_path(config: &Config) -> PathBuf {
    if let Some(path) = config.cache_file.as_deref().filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nps-sites")
        .join("cache.json")
}

pub fn parse_config(content: &str) -> Result<Config, SiteError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn load_config() -> Result<Config, SiteError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), SiteError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| SiteError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| SiteError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(SiteError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}

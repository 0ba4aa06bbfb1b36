//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding all wishes, relative to the working directory
    #[serde(default = "default_wishes_file")]
    pub wishes_file: String,
}

fn default_wishes_file() -> String {
    "wishes.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            wishes_file: default_wishes_file(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_max_body_size() -> usize {
    100 * 1024 // 100 KB
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_size: default_max_body_size(),
        }
    }
}

/// Dashboard page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_title")]
    pub title: String,

    /// Seconds between automatic page reloads
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_dashboard_title() -> String {
    "Birthday Wishes Dashboard".to_string()
}

fn default_refresh_secs() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_dashboard_title(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether events should be emitted as JSON lines
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing config file among the default locations
    pub fn find_default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("wishwall").join("config.toml")),
            Some(PathBuf::from("/etc/wishwall/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Storage overrides
        if let Some(file) = lookup("WISHWALL_WISHES_FILE") {
            self.storage.wishes_file = file;
        }

        // API overrides
        if let Some(host) = lookup("WISHWALL_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("WISHWALL_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        // Dashboard overrides
        if let Some(title) = lookup("WISHWALL_DASHBOARD_TITLE") {
            self.dashboard.title = title;
        }
        if let Some(secs) = lookup("WISHWALL_REFRESH_SECS").and_then(|s| s.parse().ok()) {
            self.dashboard.refresh_secs = secs;
        }

        // Logging overrides
        if let Some(level) = lookup("WISHWALL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("WISHWALL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Wishwall Configuration
#
# Environment variables override these settings:
# - WISHWALL_WISHES_FILE
# - WISHWALL_HOST
# - WISHWALL_PORT
# - WISHWALL_DASHBOARD_TITLE
# - WISHWALL_REFRESH_SECS
# - WISHWALL_LOG_LEVEL
# - WISHWALL_LOG_FORMAT

[storage]
# JSON file holding all wishes (relative to the working directory)
wishes_file = "wishes.json"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 3001

# Maximum request body size (bytes)
max_body_size = 102400

[dashboard]
# Page title shown at /admin/wishes
title = "Birthday Wishes Dashboard"

# Seconds between automatic page reloads
refresh_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

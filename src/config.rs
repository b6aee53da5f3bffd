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
    pub store: StoreConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub aigen: AigenConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content library configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("storycrafter").to_string_lossy().to_string())
        .unwrap_or_else(|| "./storycrafter_data".to_string())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
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

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

/// AI generation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AigenConfig {
    #[serde(default = "default_aigen_url")]
    pub url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_aigen_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_aigen_enabled")]
    pub enabled: bool,
}

fn default_aigen_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_aigen_timeout() -> u64 {
    30_000
}

fn default_aigen_enabled() -> bool {
    true
}

impl Default for AigenConfig {
    fn default() -> Self {
        Self {
            url: default_aigen_url(),
            api_key: String::new(),
            request_timeout_ms: default_aigen_timeout(),
            enabled: default_aigen_enabled(),
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("storycrafter").join("config.toml")),
            Some(PathBuf::from("/etc/storycrafter/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(data_dir) = lookup("STORYCRAFTER_DATA_DIR") {
            self.store.data_dir = data_dir;
        }

        if let Some(host) = lookup("STORYCRAFTER_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("STORYCRAFTER_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Some(url) = lookup("STORYCRAFTER_AIGEN_URL") {
            self.aigen.url = url;
        }
        if let Some(key) = lookup("STORYCRAFTER_AIGEN_KEY") {
            self.aigen.api_key = key;
        }

        if let Some(level) = lookup("STORYCRAFTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("STORYCRAFTER_LOG_FORMAT") {
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
    r#"# StoryCrafter Configuration
#
# Environment variables override these settings:
# - STORYCRAFTER_DATA_DIR
# - STORYCRAFTER_API_HOST
# - STORYCRAFTER_API_PORT
# - STORYCRAFTER_AIGEN_URL
# - STORYCRAFTER_AIGEN_KEY
# - STORYCRAFTER_LOG_LEVEL
# - STORYCRAFTER_LOG_FORMAT

[store]
# Directory for the content library database
data_dir = "~/.local/share/storycrafter"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 5000

# Allowed CORS origins (the dashboard dev server by default)
cors_origins = ["http://localhost:5173", "http://127.0.0.1:5173"]

[aigen]
# Generation service base URL
url = "http://localhost:8090"

# Bearer token for the generation service (empty sends no auth header)
api_key = ""

# Upstream request timeout (ms)
request_timeout_ms = 30000

# Enable the generation, TTS and thumbnail proxy endpoints
enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 5000);
        assert!(config.aigen.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[api]\nport = 9000\n").unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.aigen.url, "http://localhost:8090");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: std::collections::HashMap<&str, &str> = [
            ("STORYCRAFTER_DATA_DIR", "/tmp/sc-data"),
            ("STORYCRAFTER_API_HOST", "127.0.0.1"),
            ("STORYCRAFTER_API_PORT", "9100"),
            ("STORYCRAFTER_AIGEN_URL", "http://aigen:9999"),
            ("STORYCRAFTER_AIGEN_KEY", "secret"),
            ("STORYCRAFTER_LOG_LEVEL", "debug"),
            ("STORYCRAFTER_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config: Config = toml::from_str("[api]\nport = 9000\n").unwrap();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.store.data_dir, "/tmp/sc-data");
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 9100);
        assert_eq!(config.aigen.url, "http://aigen:9999");
        assert_eq!(config.aigen.api_key, "secret");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_unset_and_malformed_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|name| match name {
            "STORYCRAFTER_API_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        // The unparseable port and the absent variables leave defaults intact
        assert_eq!(config.api.port, 5000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.logging.format, "pretty");
    }
}

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
    pub backend: BackendConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform backend the dashboard talks to
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_render_health_url")]
    pub render_health_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_list_limit")]
    pub list_limit: u32,

    #[serde(default = "default_seed")]
    pub default_seed: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_render_health_url() -> String {
    "http://localhost:9000/health".to_string()
}

fn default_request_timeout() -> u64 {
    20
}

fn default_list_limit() -> u32 {
    20
}

fn default_seed() -> String {
    "https://www.mevzuat.gov.tr/".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            render_health_url: default_render_health_url(),
            request_timeout_secs: default_request_timeout(),
            list_limit: default_list_limit(),
            default_seed: default_seed(),
        }
    }
}

/// Dashboard HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Background refresh configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds between background refreshes, 0 disables polling
    #[serde(default = "default_poll_interval")]
    pub interval_secs: u64,
}

fn default_poll_interval() -> u64 {
    30
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval(),
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
    /// Whether the JSON log layer should be used
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

    /// Candidate config files, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("regdash").join("config.toml")),
            Some(PathBuf::from("/etc/regdash/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here since this runs before tracing is set up;
    /// call [`LoadReport::log`] once the subscriber is installed.
    pub fn load_default() -> (Self, LoadReport) {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file of `paths` that parses, falling back
    /// to defaults with environment overrides
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    report.loaded_from = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.skipped.push(e),
            }
        }

        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Backend overrides
        if let Ok(url) = std::env::var("REGDASH_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Ok(url) = std::env::var("REGDASH_RENDER_HEALTH_URL") {
            self.backend.render_health_url = url;
        }
        if let Ok(timeout) = std::env::var("REGDASH_REQUEST_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.backend.request_timeout_secs = t;
            }
        }

        // Server overrides
        if let Ok(host) = std::env::var("REGDASH_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("REGDASH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(interval) = std::env::var("REGDASH_POLL_INTERVAL") {
            if let Ok(i) = interval.parse() {
                self.poll.interval_secs = i;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("REGDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("REGDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of a config file search
#[derive(Debug, Default)]
pub struct LoadReport {
    /// File the config was read from, `None` for defaults
    pub loaded_from: Option<PathBuf>,
    /// Candidate files that exist but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl LoadReport {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            loaded_from: Some(path.into()),
            skipped: Vec::new(),
        }
    }

    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("Skipped config file: {}", error);
        }
        match &self.loaded_from {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# Regdash Configuration
#
# Environment variables override these settings:
# - REGDASH_BACKEND_URL
# - REGDASH_RENDER_HEALTH_URL
# - REGDASH_REQUEST_TIMEOUT
# - REGDASH_HOST
# - REGDASH_PORT
# - REGDASH_POLL_INTERVAL
# - REGDASH_LOG_LEVEL
# - REGDASH_LOG_FORMAT

[backend]
# Platform API base URL
base_url = "http://localhost:8000"

# Render service health probe
render_health_url = "http://localhost:9000/health"

# Per-request timeout in seconds
request_timeout_secs = 20

# Rows fetched for the recent regulation and change lists
list_limit = 20

# Seed URL used by `regdash-cli ingest` when --seed is omitted
default_seed = "https://www.mevzuat.gov.tr/"

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8084

[poll]
# Seconds between background refreshes (0 disables polling)
interval_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

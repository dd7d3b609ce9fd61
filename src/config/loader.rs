//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Base URL of the public geographic reference API (IBGE localidades).
pub const DEFAULT_GEO_API_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Base URL of the application backend when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3333";

/// Request timeout when none is configured, in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/ecoleta/config.toml`.
///
/// ```toml
/// backend_url = "https://api.ecoleta.example"
/// request_timeout_secs = 10
/// suppressed_warnings = ["Failed to fetch estados"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the geographic reference API.
    #[serde(default)]
    pub geo_api_url: Option<String>,

    /// Base URL of the application backend.
    #[serde(default)]
    pub backend_url: Option<String>,

    /// Timeout applied to every HTTP request, in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Warning message prefixes that should not be logged.
    #[serde(default)]
    pub suppressed_warnings: Option<Vec<String>>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Geographic API base URL.
    pub geo_api_url: String,
    /// Backend API base URL.
    pub backend_url: String,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Warning message prefixes dropped by `Diagnostics`.
    pub suppressed_warnings: BTreeSet<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            geo_api_url: DEFAULT_GEO_API_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_file_path: default_log_path(),
            suppressed_warnings: BTreeSet::new(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ecoleta/ecoleta.log` on Linux, or the platform
/// state/data directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir().or_else(dirs::data_local_dir) {
        Some(dir) => dir.join("ecoleta").join("ecoleta.log"),
        None => PathBuf::from("ecoleta.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/ecoleta/config.toml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ecoleta").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ECOLETA_CONFIG` environment variable
/// 3. Default path `~/.config/ecoleta/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ECOLETA_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        geo_api_url: config.geo_api_url.unwrap_or(defaults.geo_api_url),
        backend_url: config.backend_url.unwrap_or(defaults.backend_url),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        suppressed_warnings: config
            .suppressed_warnings
            .map(|w| w.into_iter().collect())
            .unwrap_or(defaults.suppressed_warnings),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ECOLETA_BACKEND_URL`: Override backend base URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("ECOLETA_BACKEND_URL") {
        config.backend_url = url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user explicitly set are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    backend_url_override: Option<String>,
) -> ResolvedConfig {
    if let Some(url) = backend_url_override {
        config.backend_url = url;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PAACK_API_HOST`: Business API host
//! - `PAACK_LABEL_HOST`: Label API host
//! - `PAACK_ORDER_TOKEN_ENDPOINT`: Token issuer for order operations
//! - `PAACK_LABEL_TOKEN_ENDPOINT`: Token issuer for label operations
//! - `PAACK_ORDER_CLIENT_ID` / `PAACK_ORDER_CLIENT_SECRET`: Order credentials
//! - `PAACK_ORDER_AUDIENCE`: Audience for the order grant
//! - `PAACK_LABEL_CLIENT_ID` / `PAACK_LABEL_CLIENT_SECRET`: Label credentials
//! - `PAACK_LABEL_AUDIENCE`: Audience for the label grant
//!
//! ## File Locations
//! The loader probes `./paack.{json,toml}` and `./config.{json,toml}` in the
//! working directory, then the parent directory, then next to the
//! executable.

use std::path::{Path, PathBuf};

use super::{ConfigError, PaackConfig};

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns [`ConfigError`] when neither source yields a complete, valid
/// configuration.
pub fn load() -> Result<PaackConfig, ConfigError> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "environment incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables.
///
/// All `PAACK_*` variables must be present; see the module documentation
/// for the list.
///
/// # Errors
/// Returns [`ConfigError`] if a variable is missing or the result fails
/// validation.
pub fn load_from_env() -> Result<PaackConfig, ConfigError> {
    let config = PaackConfig {
        api_host: env_var("PAACK_API_HOST")?,
        label_host: env_var("PAACK_LABEL_HOST")?,
        order_token_endpoint: env_var("PAACK_ORDER_TOKEN_ENDPOINT")?,
        label_token_endpoint: env_var("PAACK_LABEL_TOKEN_ENDPOINT")?,
        order_client_id: env_var("PAACK_ORDER_CLIENT_ID")?,
        order_client_secret: env_var("PAACK_ORDER_CLIENT_SECRET")?,
        order_audience: env_var("PAACK_ORDER_AUDIENCE")?,
        label_client_id: env_var("PAACK_LABEL_CLIENT_ID")?,
        label_client_secret: env_var("PAACK_LABEL_CLIENT_SECRET")?,
        label_audience: env_var("PAACK_LABEL_AUDIENCE")?,
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Format is detected
/// by extension (`.json` or `.toml`).
///
/// # Errors
/// Returns [`ConfigError`] when no file is found, the format is
/// unsupported, or the contents fail validation.
pub fn load_from_file(path: Option<PathBuf>) -> Result<PaackConfig, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::Invalid(format!("config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConfigError::Invalid("no config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConfigError::Invalid(format!("failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content, format chosen by extension.
fn parse_config(contents: &str, path: &Path) -> Result<PaackConfig, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Invalid(format!("invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Invalid(format!("invalid JSON format: {e}"))),
        _ => Err(ConfigError::Invalid(format!("unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("paack.json"),
            cwd.join("paack.toml"),
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("../paack.json"),
            cwd.join("../paack.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("paack.json"),
                exe_dir.join("paack.toml"),
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable.
fn env_var(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::Invalid(format!("missing environment variable: {key}")))
}

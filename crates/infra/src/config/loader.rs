//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment when one exists
//! 2. Attempts to load from environment variables
//! 3. If the required image store variables are missing, falls back to a file
//! 4. Probes multiple paths for config files (JSON or TOML)
//!
//! ## Environment Variables
//! Required:
//! - `LINKFOLIO_IMAGE_UPLOAD_URL`: Image provider upload endpoint
//! - `LINKFOLIO_IMAGE_API_KEY`: Image provider API key
//! - `LINKFOLIO_IMAGE_API_SECRET`: Image provider signing secret
//!
//! Optional (defaults in `linkfolio_domain::constants`):
//! - `LINKFOLIO_HOST`, `LINKFOLIO_PORT`: Listener address
//! - `LINKFOLIO_MAX_BODY_BYTES`: Request body limit
//! - `LINKFOLIO_DB_PATH`, `LINKFOLIO_DB_POOL_SIZE`: SQLite file and pool size
//! - `LINKFOLIO_IMAGE_FOLDER`: Folder uploads are placed in
//! - `LINKFOLIO_IMAGE_TIMEOUT_SECS`: Upload request timeout
//! - `LINKFOLIO_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.{json,toml}` or `./linkfolio.{json,toml}`
//! 2. `../config.{json,toml}` and `../../config.{json,toml}`
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use linkfolio_domain::{
    Config, DatabaseConfig, ImageStoreConfig, LinkfolioError, LoggingConfig, Result,
    ServerConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `LinkfolioError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The image store variables must be present; everything else falls back
/// to its default.
///
/// # Errors
/// Returns `LinkfolioError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let upload_url = env_var("LINKFOLIO_IMAGE_UPLOAD_URL")?;
    let api_key = env_var("LINKFOLIO_IMAGE_API_KEY")?;
    let api_secret = env_var("LINKFOLIO_IMAGE_API_SECRET")?;

    let server_defaults = ServerConfig::default();
    let database_defaults = DatabaseConfig::default();

    let server = ServerConfig {
        host: std::env::var("LINKFOLIO_HOST").unwrap_or(server_defaults.host),
        port: env_parse("LINKFOLIO_PORT", "port")?.unwrap_or(server_defaults.port),
        max_body_bytes: env_parse("LINKFOLIO_MAX_BODY_BYTES", "max body bytes")?
            .unwrap_or(server_defaults.max_body_bytes),
    };

    let database = DatabaseConfig {
        path: std::env::var("LINKFOLIO_DB_PATH").unwrap_or(database_defaults.path),
        pool_size: env_parse("LINKFOLIO_DB_POOL_SIZE", "pool size")?
            .unwrap_or(database_defaults.pool_size),
    };

    let image_store = ImageStoreConfig {
        upload_url,
        api_key,
        api_secret,
        folder: std::env::var("LINKFOLIO_IMAGE_FOLDER").ok().filter(|f| !f.trim().is_empty()),
        timeout_seconds: env_parse("LINKFOLIO_IMAGE_TIMEOUT_SECS", "image timeout")?
            .unwrap_or(linkfolio_domain::constants::DEFAULT_IMAGE_TIMEOUT_SECS),
    };

    let logging = LoggingConfig { json: env_bool("LINKFOLIO_LOG_JSON", false) };

    Ok(Config { server, database, image_store, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LinkfolioError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LinkfolioError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LinkfolioError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LinkfolioError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LinkfolioError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LinkfolioError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(LinkfolioError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("linkfolio.json"),
        dir.join("linkfolio.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `LinkfolioError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty()).ok_or_else(|| {
        LinkfolioError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional environment variable
///
/// Returns `Ok(None)` when the variable is unset.
fn env_parse<T>(key: &str, label: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| LinkfolioError::Config(format!("Invalid {label}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

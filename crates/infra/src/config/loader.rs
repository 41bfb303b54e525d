//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `HUBSPOT_CLIENT_ID`: OAuth client id (required)
//! - `HUBSPOT_CLIENT_SECRET`: OAuth client secret (required)
//! - `HUBSPOT_REDIRECT_URI`: Redirect URI registered with HubSpot
//! - `HUBSPOT_AUTHORIZE_URL`: Consent page URL
//! - `HUBSPOT_TOKEN_URL`: Token endpoint URL
//! - `HUBSPOT_API_BASE_URL`: CRM API base URL
//! - `HUBSPOT_SCOPES`: Space separated scopes
//! - `CRMBRIDGE_BIND_ADDR`: HTTP listen address (`host:port`)
//! - `CRMBRIDGE_STORE_BACKEND`: `memory` or `redis`
//! - `CRMBRIDGE_REDIS_URL`: Redis connection URL
//! - `CRMBRIDGE_STORE_MAX_CAPACITY`: In-memory store capacity
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./crmbridge.json` or `./crmbridge.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use crmbridge_domain::{
    Config, CrmBridgeError, HubSpotConfig, Result, ServerConfig, StateStoreConfig,
};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `CrmBridgeError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load a `.env` file into the process environment, if one exists.
///
/// Returns the path that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Some(path)
        }
        Err(_) => None,
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `CrmBridgeError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    load_from_vars(|key| std::env::var(key).ok())
}

/// Load configuration from any key/value source shaped like the environment.
///
/// # Errors
/// Same as [`load_from_env`].
pub fn load_from_vars<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let required = |key: &str| {
        var(key).ok_or_else(|| {
            CrmBridgeError::Config(format!("Missing required environment variable: {key}"))
        })
    };

    let mut hubspot =
        HubSpotConfig::new(required("HUBSPOT_CLIENT_ID")?, required("HUBSPOT_CLIENT_SECRET")?);
    if let Some(uri) = var("HUBSPOT_REDIRECT_URI") {
        hubspot.redirect_uri = uri;
    }
    if let Some(url) = var("HUBSPOT_AUTHORIZE_URL") {
        hubspot.authorize_url = url;
    }
    if let Some(url) = var("HUBSPOT_TOKEN_URL") {
        hubspot.token_url = url;
    }
    if let Some(url) = var("HUBSPOT_API_BASE_URL") {
        hubspot.api_base_url = url;
    }
    if let Some(scopes) = var("HUBSPOT_SCOPES") {
        hubspot.scopes = scopes.split_whitespace().map(str::to_string).collect();
    }

    let mut store = StateStoreConfig::default();
    if let Some(backend) = var("CRMBRIDGE_STORE_BACKEND") {
        store.backend = backend.parse()?;
    }
    if let Some(url) = var("CRMBRIDGE_REDIS_URL") {
        store.redis_url = url;
    }
    if let Some(capacity) = var("CRMBRIDGE_STORE_MAX_CAPACITY") {
        store.max_capacity = capacity.trim().parse::<u64>().map_err(|e| {
            CrmBridgeError::Config(format!("Invalid store max capacity: {e}"))
        })?;
    }

    let mut server = ServerConfig::default();
    if let Some(addr) = var("CRMBRIDGE_BIND_ADDR") {
        server.bind_addr = addr;
    }

    let config = Config { hubspot, store, server };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CrmBridgeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CrmBridgeError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CrmBridgeError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CrmBridgeError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CrmBridgeError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CrmBridgeError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(CrmBridgeError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Field checks plus URL syntax for every endpoint.
fn validate(config: &Config) -> Result<()> {
    config.validate()?;

    let hubspot = &config.hubspot;
    let urls = [
        ("redirect_uri", &hubspot.redirect_uri),
        ("authorize_url", &hubspot.authorize_url),
        ("token_url", &hubspot.token_url),
        ("api_base_url", &hubspot.api_base_url),
    ];

    for (name, value) in urls {
        Url::parse(value)
            .map_err(|e| CrmBridgeError::Config(format!("hubspot.{name} is not a URL: {e}")))?;
    }

    Ok(())
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
        dir.join("crmbridge.json"),
        dir.join("crmbridge.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
    ]
}

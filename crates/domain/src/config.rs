//! Configuration structures
//!
//! Built once at startup (see `crmbridge_infra::config`) and handed to each
//! component at construction time.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CREDENTIALS_TTL_SECONDS, DEFAULT_BIND_ADDR, DEFAULT_REDIRECT_URI, DEFAULT_REDIS_URL,
    DEFAULT_SCOPES, DEFAULT_STORE_MAX_CAPACITY, HUBSPOT_API_BASE_URL, HUBSPOT_AUTHORIZE_URL,
    HUBSPOT_TOKEN_URL, STATE_TTL_SECONDS,
};
use crate::errors::{CrmBridgeError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub hubspot: HubSpotConfig,
    #[serde(default)]
    pub store: StateStoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Validate all sections.
    ///
    /// # Errors
    /// Returns `CrmBridgeError::Config` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.hubspot.validate()?;
        self.store.validate()?;
        self.server.validate()
    }
}

/// OAuth client credentials and provider endpoints
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubSpotConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_authorize_url")]
    pub authorize_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    #[serde(default = "default_state_ttl")]
    pub state_ttl_seconds: u64,
    #[serde(default = "default_credentials_ttl")]
    pub credentials_ttl_seconds: u64,
}

impl HubSpotConfig {
    /// Create a configuration with HubSpot's production endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: default_redirect_uri(),
            authorize_url: default_authorize_url(),
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
            scopes: default_scopes(),
            state_ttl_seconds: STATE_TTL_SECONDS,
            credentials_ttl_seconds: CREDENTIALS_TTL_SECONDS,
        }
    }

    /// Scopes joined the way the authorize endpoint expects them.
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// # Errors
    /// Returns `CrmBridgeError::Config` if a required field is empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("redirect_uri", &self.redirect_uri),
            ("authorize_url", &self.authorize_url),
            ("token_url", &self.token_url),
            ("api_base_url", &self.api_base_url),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(CrmBridgeError::Config(format!("hubspot.{name} must not be empty")));
            }
        }

        if self.state_ttl_seconds == 0 || self.credentials_ttl_seconds == 0 {
            return Err(CrmBridgeError::Config("store TTLs must be greater than zero".into()));
        }

        Ok(())
    }
}

// Keep the client secret out of debug output.
impl std::fmt::Debug for HubSpotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubSpotConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .field("scopes", &self.scopes)
            .field("state_ttl_seconds", &self.state_ttl_seconds)
            .field("credentials_ttl_seconds", &self.credentials_ttl_seconds)
            .finish()
    }
}

/// Which state store backend to use
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Memory,
    Redis,
}

impl std::str::FromStr for StoreBackend {
    type Err = CrmBridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(CrmBridgeError::Config(format!("unknown store backend: {other}"))),
        }
    }
}

/// State store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateStoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for StateStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            redis_url: default_redis_url(),
            max_capacity: default_max_capacity(),
        }
    }
}

impl StateStoreConfig {
    /// # Errors
    /// Returns `CrmBridgeError::Config` for an empty Redis URL or zero capacity.
    pub fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::Redis && self.redis_url.trim().is_empty() {
            return Err(CrmBridgeError::Config("store.redis_url must not be empty".into()));
        }
        if self.max_capacity == 0 {
            return Err(CrmBridgeError::Config("store.max_capacity must be positive".into()));
        }
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns `CrmBridgeError::Config` if the bind address is not `host:port`.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map(|_| ())
            .map_err(|e| CrmBridgeError::Config(format!("invalid bind address: {e}")))
    }
}

fn default_redirect_uri() -> String {
    DEFAULT_REDIRECT_URI.to_string()
}

fn default_authorize_url() -> String {
    HUBSPOT_AUTHORIZE_URL.to_string()
}

fn default_token_url() -> String {
    HUBSPOT_TOKEN_URL.to_string()
}

fn default_api_base_url() -> String {
    HUBSPOT_API_BASE_URL.to_string()
}

/// Scopes requested when none are configured.
#[must_use]
pub fn default_scopes() -> Vec<String> {
    DEFAULT_SCOPES.iter().map(|s| (*s).to_string()).collect()
}

const fn default_state_ttl() -> u64 {
    STATE_TTL_SECONDS
}

const fn default_credentials_ttl() -> u64 {
    CREDENTIALS_TTL_SECONDS
}

fn default_redis_url() -> String {
    DEFAULT_REDIS_URL.to_string()
}

const fn default_max_capacity() -> u64 {
    DEFAULT_STORE_MAX_CAPACITY
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

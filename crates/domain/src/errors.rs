//! Error types used throughout the integration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for crmbridge
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CrmBridgeError {
    /// The provider reported an error (callback `error` param or a rejected
    /// token request).
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Returned state is absent or does not match the stored token.
    #[error("State mismatch: {0}")]
    StateMismatch(String),

    #[error("Credentials missing: {0}")]
    CredentialsMissing(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("State store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CrmBridgeError {
    /// Whether the failure was caused by the caller (maps to a 4xx response).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Upstream(_)
                | Self::StateMismatch(_)
                | Self::CredentialsMissing(_)
                | Self::InvalidInput(_)
        )
    }

    /// Stable label suitable for logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "upstream",
            Self::StateMismatch(_) => "state_mismatch",
            Self::CredentialsMissing(_) => "credentials_missing",
            Self::InvalidInput(_) => "invalid_input",
            Self::Network(_) => "network",
            Self::Store(_) => "store",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// The bare message, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Upstream(m)
            | Self::StateMismatch(m)
            | Self::CredentialsMissing(m)
            | Self::InvalidInput(m)
            | Self::Network(m)
            | Self::Store(m)
            | Self::Config(m)
            | Self::Internal(m) => m,
        }
    }
}

/// Result type alias for crmbridge operations
pub type Result<T> = std::result::Result<T, CrmBridgeError>;

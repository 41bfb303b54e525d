//! OAuth handshake types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anti-CSRF state round-tripped through the provider's consent screen.
///
/// Serialized as JSON (`{"state": ..., "user_id": ..., "org_id": ...}`) and
/// appended verbatim to the authorization URL, so the callback can recover
/// which `(org, user)` pair started the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthState {
    /// Random token compared against the stored copy on callback
    pub state: String,
    pub user_id: String,
    pub org_id: String,
}

impl OAuthState {
    pub fn new(
        state: impl Into<String>,
        user_id: impl Into<String>,
        org_id: impl Into<String>,
    ) -> Self {
        Self { state: state.into(), user_id: user_id.into(), org_id: org_id.into() }
    }
}

/// Query parameters delivered to the redirect URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Raw token response from the provider, kept opaque.
///
/// Only `access_token` is interpreted; everything else (token type, expiry,
/// refresh token) is passed through to the consumer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialBlob(Value);

impl CredentialBlob {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Bearer token, if the provider issued one.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    /// `null`, `{}`, `[]` and `""` all count as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for CredentialBlob {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

//! Authorization URL builder

use std::sync::Arc;

use crmbridge_domain::{CrmBridgeError, HubSpotConfig, OAuthState, Result};
use tracing::info;

use super::state_token::generate_state_token;
use crate::integration_ports::StateStore;
use crate::keys::state_key;

/// Builds the provider consent URL and persists the state it embeds.
pub struct AuthorizationUrlBuilder {
    config: Arc<HubSpotConfig>,
    store: Arc<dyn StateStore>,
}

impl AuthorizationUrlBuilder {
    pub fn new(config: Arc<HubSpotConfig>, store: Arc<dyn StateStore>) -> Self {
        Self { config, store }
    }

    /// Start an authorization for `(org_id, user_id)`.
    ///
    /// Stores the serialized [`OAuthState`] under `state:{org}:{user}` for
    /// `state_ttl_seconds`, replacing any earlier pending state for the pair,
    /// and returns the consent URL carrying the same JSON in its `state`
    /// parameter.
    ///
    /// # Errors
    /// Propagates state store write failures.
    pub async fn authorize(&self, user_id: &str, org_id: &str) -> Result<String> {
        let state = OAuthState::new(generate_state_token(), user_id, org_id);
        let encoded_state = serde_json::to_string(&state)
            .map_err(|e| CrmBridgeError::Internal(format!("failed to encode OAuth state: {e}")))?;

        self.store
            .set(&state_key(org_id, user_id), &encoded_state, self.config.state_ttl_seconds)
            .await?;

        info!(org_id, user_id, "hubspot authorization started");

        Ok(self.consent_url(&encoded_state))
    }

    fn consent_url(&self, encoded_state: &str) -> String {
        let scope = self.config.scope_string();
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", encoded_state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.config.authorize_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{query_string}", self.config.authorize_url)
    }
}

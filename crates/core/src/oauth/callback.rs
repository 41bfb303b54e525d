//! Redirect callback handling
//!
//! Validates the returned state against the stored copy, then exchanges the
//! authorization code while the consumed state is deleted in parallel.

use std::sync::Arc;

use crmbridge_domain::{
    CallbackParams, CredentialBlob, CrmBridgeError, HubSpotConfig, OAuthState, Result,
};
use tracing::{info, warn};

use crate::integration_ports::{StateStore, TokenEndpoint};
use crate::keys::{credentials_key, state_key};

const STATE_MISMATCH: &str = "State does not match.";

/// Handles `GET {redirect_uri}?code=...&state=...[&error=...]`.
pub struct CallbackHandler {
    config: Arc<HubSpotConfig>,
    store: Arc<dyn StateStore>,
    token_endpoint: Arc<dyn TokenEndpoint>,
}

impl CallbackHandler {
    pub fn new(
        config: Arc<HubSpotConfig>,
        store: Arc<dyn StateStore>,
        token_endpoint: Arc<dyn TokenEndpoint>,
    ) -> Self {
        Self { config, store, token_endpoint }
    }

    /// Complete the handshake and cache the token response.
    ///
    /// Returns the validated state so callers know which `(org, user)` pair
    /// finished.
    ///
    /// # Errors
    /// - `Upstream` if the provider sent `error`, or rejected the code
    /// - `StateMismatch` if the state is missing, malformed, unknown or stale
    /// - `InvalidInput` if the state is valid but `code` is missing
    /// - `Network` / `Store` for transport and store failures
    pub async fn handle(&self, params: CallbackParams) -> Result<OAuthState> {
        if let Some(error) = params.error.filter(|e| !e.is_empty()) {
            warn!(reason = "provider_error", error = %error, "hubspot callback rejected");
            return Err(CrmBridgeError::Upstream(error));
        }

        let presented = parse_presented_state(params.state.as_deref())?;
        let pending_key = state_key(&presented.org_id, &presented.user_id);

        let saved = self
            .store
            .get(&pending_key)
            .await?
            .and_then(|raw| serde_json::from_str::<OAuthState>(&raw).ok());

        match saved {
            Some(saved) if saved.state == presented.state => {}
            Some(_) => {
                warn!(
                    reason = "token_mismatch",
                    org_id = %presented.org_id,
                    user_id = %presented.user_id,
                    "hubspot callback rejected"
                );
                return Err(CrmBridgeError::StateMismatch(STATE_MISMATCH.into()));
            }
            None => {
                warn!(
                    reason = "state_not_found",
                    org_id = %presented.org_id,
                    user_id = %presented.user_id,
                    "hubspot callback rejected"
                );
                return Err(CrmBridgeError::StateMismatch(STATE_MISMATCH.into()));
            }
        }

        let code = params
            .code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CrmBridgeError::InvalidInput("missing authorization code".into()))?;

        // Both run to completion; the pending state is gone even if the exchange fails.
        let (exchanged, deleted) = tokio::join!(
            self.token_endpoint.exchange_code(&code),
            self.store.delete(&pending_key),
        );
        deleted?;
        let credentials = exchanged?;

        self.store_credentials(&presented, &credentials).await?;

        info!(
            org_id = %presented.org_id,
            user_id = %presented.user_id,
            "hubspot authorization code exchanged"
        );

        Ok(presented)
    }

    async fn store_credentials(&self, state: &OAuthState, credentials: &CredentialBlob) -> Result<()> {
        let encoded = serde_json::to_string(credentials)
            .map_err(|e| CrmBridgeError::Internal(format!("failed to encode credentials: {e}")))?;

        self.store
            .set(
                &credentials_key(&state.org_id, &state.user_id),
                &encoded,
                self.config.credentials_ttl_seconds,
            )
            .await
    }
}

fn parse_presented_state(raw: Option<&str>) -> Result<OAuthState> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CrmBridgeError::StateMismatch("missing state parameter".into()))?;

    serde_json::from_str(raw).map_err(|_| {
        warn!(reason = "malformed_state", "hubspot callback rejected");
        CrmBridgeError::StateMismatch(STATE_MISMATCH.into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_is_a_mismatch() {
        assert!(matches!(parse_presented_state(None), Err(CrmBridgeError::StateMismatch(_))));
        assert!(matches!(parse_presented_state(Some("")), Err(CrmBridgeError::StateMismatch(_))));
    }

    #[test]
    fn non_json_state_is_a_mismatch() {
        assert!(matches!(
            parse_presented_state(Some("not-json")),
            Err(CrmBridgeError::StateMismatch(_))
        ));
        assert!(matches!(
            parse_presented_state(Some(r#"{"state":"x"}"#)),
            Err(CrmBridgeError::StateMismatch(_))
        ));
    }

    #[test]
    fn well_formed_state_parses() {
        let state =
            parse_presented_state(Some(r#"{"state":"t","user_id":"u","org_id":"o"}"#)).unwrap();
        assert_eq!(state, OAuthState::new("t", "u", "o"));
    }
}

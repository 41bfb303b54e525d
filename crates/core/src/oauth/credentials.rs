//! One-time credential retrieval

use std::sync::Arc;

use crmbridge_domain::{CredentialBlob, CrmBridgeError, Result};
use tracing::info;

use crate::integration_ports::StateStore;
use crate::keys::credentials_key;

const CREDENTIALS_NOT_FOUND: &str = "Credentials not found.";

/// Read-and-delete accessor for the cached token response.
pub struct CredentialRetriever {
    store: Arc<dyn StateStore>,
}

impl CredentialRetriever {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Consume the credential blob for `(org_id, user_id)`.
    ///
    /// The key is deleted after a successful read; a second call fails with
    /// `CredentialsMissing`.
    ///
    /// # Errors
    /// - `CredentialsMissing` if nothing is cached (or the blob is empty)
    /// - `Store` if the cached value is not JSON or the store fails
    pub async fn retrieve(&self, user_id: &str, org_id: &str) -> Result<CredentialBlob> {
        let key = credentials_key(org_id, user_id);

        let raw = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| CrmBridgeError::CredentialsMissing(CREDENTIALS_NOT_FOUND.into()))?;

        let credentials: CredentialBlob = serde_json::from_str(&raw)
            .map_err(|e| CrmBridgeError::Store(format!("cached credentials are not JSON: {e}")))?;

        if credentials.is_empty() {
            return Err(CrmBridgeError::CredentialsMissing(CREDENTIALS_NOT_FOUND.into()));
        }

        self.store.delete(&key).await?;

        info!(org_id, user_id, "hubspot credentials consumed");

        Ok(credentials)
    }
}

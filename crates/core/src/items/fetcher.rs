//! Contact fetch + normalization

use std::sync::Arc;

use crmbridge_domain::{
    ContactsFetch, CredentialBlob, CrmBridgeError, IntegrationItem, ItemsOutcome, Result,
};

use super::normalize::normalize_contact;
use crate::integration_ports::ContactsApi;

/// Turns a serialized credential blob into normalized contact items.
pub struct ItemFetcher {
    contacts: Arc<dyn ContactsApi>,
}

impl ItemFetcher {
    pub fn new(contacts: Arc<dyn ContactsApi>) -> Self {
        Self { contacts }
    }

    /// Fetch contacts and keep upstream failures visible.
    ///
    /// # Errors
    /// `InvalidInput` if `credentials` is not JSON or has no `access_token`.
    pub async fn fetch(&self, credentials: &str) -> Result<ItemsOutcome> {
        let credentials: CredentialBlob = serde_json::from_str(credentials)
            .map_err(|e| CrmBridgeError::InvalidInput(format!("credentials are not JSON: {e}")))?;

        let access_token = credentials.access_token().ok_or_else(|| {
            CrmBridgeError::InvalidInput("credentials do not contain an access_token".into())
        })?;

        let outcome = match self.contacts.list_contacts(access_token).await {
            ContactsFetch::Contacts(records) => {
                ItemsOutcome::Items(records.into_iter().map(normalize_contact).collect())
            }
            ContactsFetch::UpstreamFailure { status, message } => {
                ItemsOutcome::UpstreamFailure { status, message }
            }
        };

        Ok(outcome)
    }

    /// Fetch contacts; any upstream failure yields an empty list.
    ///
    /// # Errors
    /// Same as [`ItemFetcher::fetch`]; provider failures are not errors here.
    pub async fn fetch_items(&self, credentials: &str) -> Result<Vec<IntegrationItem>> {
        Ok(self.fetch(credentials).await?.into_items())
    }
}

//! Integration port interfaces
//!
//! The pipeline components only talk to the outside world through these
//! traits. `crmbridge-infra` provides the moka/Redis stores and the reqwest
//! HubSpot client; tests substitute in-memory fakes.
//!
//! # Example
//!
//! ```no_run
//! use crmbridge_core::StateStore;
//!
//! async fn remember(store: &dyn StateStore) -> crmbridge_domain::Result<()> {
//!     store.set("state:org-1:user-1", "{}", 600).await
//! }
//! ```

use async_trait::async_trait;
use crmbridge_domain::{ContactsFetch, CredentialBlob, Result};

/// Key-value cache with per-key expiration.
///
/// Operations are independent and non-transactional. An expired key behaves
/// exactly like a missing one.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value that expires `ttl_seconds` after the write.
    ///
    /// Overwrites any existing value and resets its expiry.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;

    /// Remove a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Provider token endpoint (authorization-code grant).
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Exchange an authorization code for the provider's raw token response.
    ///
    /// # Errors
    /// - `CrmBridgeError::Upstream` when the provider rejects the grant
    /// - `CrmBridgeError::Network` on transport failure
    async fn exchange_code(&self, code: &str) -> Result<CredentialBlob>;
}

/// Provider contacts listing endpoint.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// List contacts visible to `access_token`.
    ///
    /// Never fails: anything other than a 200 response is reported as
    /// [`ContactsFetch::UpstreamFailure`].
    async fn list_contacts(&self, access_token: &str) -> ContactsFetch;
}

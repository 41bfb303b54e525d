//! Application context - dependency injection container

use std::sync::Arc;

use crmbridge_core::{
    AuthorizationUrlBuilder, CallbackHandler, CredentialRetriever, ItemFetcher, StateStore,
};
use crmbridge_domain::{Config, Result};
use crmbridge_infra::{build_state_store, HubSpotClient};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub authorizer: AuthorizationUrlBuilder,
    pub callback: CallbackHandler,
    pub retriever: CredentialRetriever,
    pub fetcher: ItemFetcher,
}

impl AppContext {
    /// Build the context, connecting to the configured state store.
    ///
    /// # Errors
    /// Propagates store connection and HTTP client construction failures.
    pub async fn new(config: Config) -> Result<Self> {
        let store = build_state_store(&config.store).await?;
        info!(backend = ?config.store.backend, "state store ready");
        Self::with_store(config, store)
    }

    /// Build the context around an existing store.
    ///
    /// # Errors
    /// Returns an error if the HubSpot HTTP client cannot be built.
    pub fn with_store(config: Config, store: Arc<dyn StateStore>) -> Result<Self> {
        let hubspot = Arc::new(config.hubspot);
        let client = Arc::new(HubSpotClient::new(hubspot.clone())?);

        Ok(Self {
            authorizer: AuthorizationUrlBuilder::new(hubspot.clone(), store.clone()),
            callback: CallbackHandler::new(hubspot, store.clone(), client.clone()),
            retriever: CredentialRetriever::new(store),
            fetcher: ItemFetcher::new(client),
        })
    }
}

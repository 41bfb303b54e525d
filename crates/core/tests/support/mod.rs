//! Shared test helpers for `crmbridge-core` integration tests.
//!
//! In-memory fakes for every port so the handshake and fetcher tests can run
//! without a network or a real store.

#![allow(dead_code)]

pub mod provider;
pub mod store;

use std::sync::Arc;

use crmbridge_core::{AuthorizationUrlBuilder, CallbackHandler, CredentialRetriever};
use crmbridge_domain::{HubSpotConfig, OAuthState};

pub use provider::{RecordingTokenEndpoint, StubContactsApi};
pub use store::{FakeStateStore, ManualClock};

/// All three handshake components wired to the same fakes.
pub struct Handshake {
    pub clock: ManualClock,
    pub store: Arc<FakeStateStore>,
    pub token_endpoint: Arc<RecordingTokenEndpoint>,
    pub authorizer: AuthorizationUrlBuilder,
    pub callback: CallbackHandler,
    pub retriever: CredentialRetriever,
}

impl Handshake {
    pub fn new() -> Self {
        let config = Arc::new(HubSpotConfig::new("test-client", "test-secret"));
        let clock = ManualClock::new();
        let store = Arc::new(FakeStateStore::new(clock.clone()));
        let token_endpoint = Arc::new(RecordingTokenEndpoint::succeeding());

        Self {
            authorizer: AuthorizationUrlBuilder::new(config.clone(), store.clone()),
            callback: CallbackHandler::new(config, store.clone(), token_endpoint.clone()),
            retriever: CredentialRetriever::new(store.clone()),
            clock,
            store,
            token_endpoint,
        }
    }

    pub fn with_token_endpoint(token_endpoint: RecordingTokenEndpoint) -> Self {
        let mut handshake = Self::new();
        let config = Arc::new(HubSpotConfig::new("test-client", "test-secret"));
        handshake.token_endpoint = Arc::new(token_endpoint);
        handshake.callback = CallbackHandler::new(
            config,
            handshake.store.clone(),
            handshake.token_endpoint.clone(),
        );
        handshake
    }
}

/// Pull the `state` query parameter back out of a consent URL.
pub fn state_from_url(url: &str) -> String {
    let encoded = url
        .split_once("state=")
        .map(|(_, rest)| rest.split('&').next().unwrap_or_default())
        .expect("consent URL should carry a state parameter");
    urlencoding::decode(encoded).expect("state should be valid UTF-8").into_owned()
}

pub fn parse_state(raw: &str) -> OAuthState {
    serde_json::from_str(raw).expect("state should be an OAuthState")
}

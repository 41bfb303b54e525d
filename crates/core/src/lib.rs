//! # crmbridge Core
//!
//! Pure integration logic - no HTTP or storage code.
//!
//! This crate contains:
//! - Port interfaces (state store, token endpoint, contacts API)
//! - The OAuth handshake components
//! - The contact fetcher and normalizer
//!
//! ## Architecture Principles
//! - Only depends on `crmbridge-domain`
//! - All external dependencies via traits
//! - Configuration injected at construction, no globals

pub mod integration_ports;
pub mod items;
pub mod keys;
pub mod oauth;

pub use integration_ports::{ContactsApi, StateStore, TokenEndpoint};
pub use items::ItemFetcher;
pub use keys::{credentials_key, state_key};
pub use oauth::{AuthorizationUrlBuilder, CallbackHandler, CredentialRetriever};

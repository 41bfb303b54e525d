//! Domain types and models

pub mod items;
pub mod oauth;

pub use items::{ContactProperties, ContactRecord, ContactsFetch, IntegrationItem, ItemsOutcome};
pub use oauth::{CallbackParams, CredentialBlob, OAuthState};

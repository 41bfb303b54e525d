//! OAuth2 authorization-code handshake
//!
//! - [`AuthorizationUrlBuilder`]: consent URL + pending state
//! - [`CallbackHandler`]: state validation + code exchange
//! - [`CredentialRetriever`]: single-use credential hand-off

pub mod authorize;
pub mod callback;
pub mod credentials;
pub mod state_token;

pub use authorize::AuthorizationUrlBuilder;
pub use callback::CallbackHandler;
pub use credentials::CredentialRetriever;
pub use state_token::generate_state_token;

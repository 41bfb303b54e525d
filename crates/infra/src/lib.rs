//! # crmbridge Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The HubSpot HTTP client (token endpoint + contacts API)
//! - State store backends (in-process moka cache, optional Redis)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `crmbridge-core`
//! - Contains all "impure" code (network, store I/O, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod state_store;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::hubspot::HubSpotClient;
pub use state_store::{build_state_store, MemoryStateStore};
#[cfg(feature = "redis")]
pub use state_store::RedisStateStore;

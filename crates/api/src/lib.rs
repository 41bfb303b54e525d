//! # crmbridge API
//!
//! HTTP surface for the HubSpot integration.
//!
//! This crate contains:
//! - axum routes for the OAuth handshake and contact loading
//! - Application context (dependency injection)
//! - Main entry point and logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the core components to their infrastructure adapters

pub mod context;
pub mod errors;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use errors::ApiError;
pub use routes::router;

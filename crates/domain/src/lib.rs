//! # crmbridge Domain
//!
//! Domain types and models for the HubSpot integration.
//!
//! This crate contains:
//! - Domain error type and Result definition
//! - OAuth handshake types (state, callback params, credential blob)
//! - Contact records and the normalized item projection
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other crmbridge crates
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

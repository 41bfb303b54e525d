//! HubSpot integration
//!
//! One client implements both provider ports: the OAuth token endpoint and
//! the CRM contacts listing.

pub mod client;
pub mod types;

pub use client::HubSpotClient;

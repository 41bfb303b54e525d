//! Logging setup and health endpoint

pub mod health;
pub mod logging;

//! Liveness endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok".to_string(), version: env!("CARGO_PKG_VERSION").to_string() }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

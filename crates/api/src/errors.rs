//! HTTP mapping for domain errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use crmbridge_domain::CrmBridgeError;
use serde_json::json;
use tracing::error;

/// Domain error rendered as `{"detail": "..."}` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub CrmBridgeError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            return StatusCode::BAD_REQUEST;
        }

        match &self.0 {
            CrmBridgeError::Network(_) => StatusCode::BAD_GATEWAY,
            CrmBridgeError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CrmBridgeError> for ApiError {
    fn from(value: CrmBridgeError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error_type = self.0.label(), error = %self.0, "request failed");
        }

        (status, Json(json!({ "detail": self.0.message() }))).into_response()
    }
}

//! HTTP routes

pub mod hubspot;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::utils::health;
use crate::AppContext;

/// Build the application router.
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/integrations/hubspot/authorize", post(hubspot::authorize))
        .route("/integrations/hubspot/oauth2callback", get(hubspot::oauth2callback))
        .route("/integrations/hubspot/credentials", post(hubspot::credentials))
        .route("/integrations/hubspot/load", post(hubspot::load))
        .route("/health", get(health::health))
        .with_state(context)
}

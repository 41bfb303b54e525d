//! HubSpot integration endpoints

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};
use crmbridge_domain::constants::CLOSE_WINDOW_HTML;
use crmbridge_domain::{CallbackParams, IntegrationItem};
use serde::Deserialize;
use serde_json::Value;

use crate::{ApiError, AppContext};

#[derive(Debug, Deserialize)]
pub struct UserOrgForm {
    pub user_id: String,
    pub org_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoadForm {
    pub credentials: String,
}

/// `POST /integrations/hubspot/authorize` -> consent URL as a JSON string
pub async fn authorize(
    State(context): State<Arc<AppContext>>,
    Form(form): Form<UserOrgForm>,
) -> Result<Json<String>, ApiError> {
    let url = context.authorizer.authorize(&form.user_id, &form.org_id).await?;
    Ok(Json(url))
}

/// `GET /integrations/hubspot/oauth2callback` -> page that closes the popup
pub async fn oauth2callback(
    State(context): State<Arc<AppContext>>,
    Query(mut query): Query<HashMap<String, String>>,
) -> Result<Html<&'static str>, ApiError> {
    let params = CallbackParams {
        code: query.remove("code"),
        state: query.remove("state"),
        error: query.remove("error"),
    };

    context.callback.handle(params).await?;
    Ok(Html(CLOSE_WINDOW_HTML))
}

/// `POST /integrations/hubspot/credentials` -> cached token response, once
pub async fn credentials(
    State(context): State<Arc<AppContext>>,
    Form(form): Form<UserOrgForm>,
) -> Result<Json<Value>, ApiError> {
    let credentials = context.retriever.retrieve(&form.user_id, &form.org_id).await?;
    Ok(Json(credentials.into_value()))
}

/// `POST /integrations/hubspot/load` -> normalized contact items
pub async fn load(
    State(context): State<Arc<AppContext>>,
    Form(form): Form<LoadForm>,
) -> Result<Json<Vec<IntegrationItem>>, ApiError> {
    let items = context.fetcher.fetch_items(&form.credentials).await?;
    Ok(Json(items))
}

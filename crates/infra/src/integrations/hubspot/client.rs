//! HubSpot HTTP client
//!
//! Implements [`TokenEndpoint`] (authorization-code exchange) and
//! [`ContactsApi`] (CRM contacts listing) on top of [`HttpClient`].

use std::sync::Arc;

use async_trait::async_trait;
use crmbridge_core::{ContactsApi, TokenEndpoint};
use crmbridge_domain::constants::HUBSPOT_CONTACTS_PATH;
use crmbridge_domain::{ContactsFetch, CredentialBlob, CrmBridgeError, HubSpotConfig, Result};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{AuthorizationCodeGrant, ContactsPage};
use crate::http::HttpClient;

/// HubSpot API client
#[derive(Clone)]
pub struct HubSpotClient {
    http: HttpClient,
    config: Arc<HubSpotConfig>,
}

impl HubSpotClient {
    /// Create a client with a default [`HttpClient`].
    ///
    /// # Errors
    /// Returns `CrmBridgeError::Internal` if the HTTP client cannot be built.
    pub fn new(config: Arc<HubSpotConfig>) -> Result<Self> {
        Ok(Self::with_http(config, HttpClient::new()?))
    }

    pub fn with_http(config: Arc<HubSpotConfig>, http: HttpClient) -> Self {
        Self { http, config }
    }

    fn contacts_url(&self) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), HUBSPOT_CONTACTS_PATH)
    }
}

#[async_trait]
impl TokenEndpoint for HubSpotClient {
    async fn exchange_code(&self, code: &str) -> Result<CredentialBlob> {
        let grant = AuthorizationCodeGrant {
            grant_type: "authorization_code",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            redirect_uri: &self.config.redirect_uri,
            code,
        };

        let response = self
            .http
            .send(self.http.request(Method::POST, &self.config.token_url).form(&grant))
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "hubspot token exchange rejected");
            return Err(CrmBridgeError::Upstream(format!(
                "token exchange failed ({status}): {body}"
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            CrmBridgeError::Upstream(format!("token response was not valid JSON: {e}"))
        })?;

        debug!("hubspot token response received");
        Ok(CredentialBlob::new(payload))
    }
}

#[async_trait]
impl ContactsApi for HubSpotClient {
    async fn list_contacts(&self, access_token: &str) -> ContactsFetch {
        let request = self.http.request(Method::GET, self.contacts_url()).bearer_auth(access_token);

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                return ContactsFetch::UpstreamFailure { status: None, message: err.to_string() }
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            return ContactsFetch::UpstreamFailure { status: Some(status.as_u16()), message };
        }

        match response.json::<ContactsPage>().await {
            Ok(page) => ContactsFetch::Contacts(page.results),
            Err(err) => ContactsFetch::UpstreamFailure {
                status: Some(status.as_u16()),
                message: format!("unreadable contacts response: {err}"),
            },
        }
    }
}

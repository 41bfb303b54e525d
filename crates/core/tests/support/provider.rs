//! Recording fakes for the provider ports.

use std::sync::Mutex;

use async_trait::async_trait;
use crmbridge_core::{ContactsApi, TokenEndpoint};
use crmbridge_domain::{
    ContactProperties, ContactRecord, ContactsFetch, CredentialBlob, CrmBridgeError,
    Result as DomainResult,
};
use serde_json::json;

/// Token endpoint that records every code it is asked to exchange.
pub struct RecordingTokenEndpoint {
    response: DomainResult<CredentialBlob>,
    codes: Mutex<Vec<String>>,
}

impl RecordingTokenEndpoint {
    pub fn succeeding() -> Self {
        Self::responding(Ok(CredentialBlob::new(json!({
            "access_token": "access-123",
            "refresh_token": "refresh-456",
            "token_type": "bearer",
            "expires_in": 1800
        }))))
    }

    pub fn rejecting(message: &str) -> Self {
        Self::responding(Err(CrmBridgeError::Upstream(message.to_string())))
    }

    pub fn responding(response: DomainResult<CredentialBlob>) -> Self {
        Self { response, codes: Mutex::new(Vec::new()) }
    }

    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.codes.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenEndpoint for RecordingTokenEndpoint {
    async fn exchange_code(&self, code: &str) -> DomainResult<CredentialBlob> {
        self.codes.lock().unwrap().push(code.to_string());
        self.response.clone()
    }
}

/// Contacts API returning a canned result and recording the bearer tokens.
pub struct StubContactsApi {
    result: ContactsFetch,
    tokens: Mutex<Vec<String>>,
}

impl StubContactsApi {
    pub fn returning(result: ContactsFetch) -> Self {
        Self { result, tokens: Mutex::new(Vec::new()) }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactsApi for StubContactsApi {
    async fn list_contacts(&self, access_token: &str) -> ContactsFetch {
        self.tokens.lock().unwrap().push(access_token.to_string());
        self.result.clone()
    }
}

pub fn contact(id: &str, first: &str, last: &str, created: &str, modified: &str) -> ContactRecord {
    ContactRecord {
        id: id.to_string(),
        properties: ContactProperties {
            firstname: Some(first.to_string()),
            lastname: Some(last.to_string()),
            email: None,
            createdate: Some(created.to_string()),
            lastmodifieddate: Some(modified.to_string()),
        },
    }
}

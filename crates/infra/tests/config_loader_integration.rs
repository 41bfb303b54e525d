//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use crmbridge_domain::{CrmBridgeError, StoreBackend};
use crmbridge_infra::config;
use tempfile::Builder;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_config_from_json_file() {
    let file = write_config(
        ".json",
        r#"{
            "hubspot": {
                "client_id": "json-client",
                "client_secret": "json-secret",
                "redirect_uri": "https://app.example.com/integrations/hubspot/oauth2callback",
                "scopes": ["oauth", "crm.objects.contacts.read"]
            },
            "store": { "backend": "redis", "redis_url": "redis://cache:6379/1" },
            "server": { "bind_addr": "0.0.0.0:8080" }
        }"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from JSON file");

    assert_eq!(config.hubspot.client_id, "json-client");
    assert_eq!(config.hubspot.scope_string(), "oauth crm.objects.contacts.read");
    assert_eq!(config.hubspot.token_url, "https://api.hubapi.com/oauth/v1/token");
    assert_eq!(config.store.backend, StoreBackend::Redis);
    assert_eq!(config.store.redis_url, "redis://cache:6379/1");
    assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
}

#[test]
fn test_load_config_from_toml_file() {
    let file = write_config(
        ".toml",
        r#"
[hubspot]
client_id = "toml-client"
client_secret = "toml-secret"
state_ttl_seconds = 300

[store]
max_capacity = 500
"#,
    );

    let config = config::load_from_file(Some(file.path().to_path_buf()))
        .expect("Failed to load config from TOML file");

    assert_eq!(config.hubspot.client_id, "toml-client");
    assert_eq!(config.hubspot.state_ttl_seconds, 300);
    assert_eq!(config.hubspot.credentials_ttl_seconds, 600);
    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert_eq!(config.store.max_capacity, 500);
}

#[test]
fn test_file_missing_client_secret_fails() {
    let file = write_config(".json", r#"{ "hubspot": { "client_id": "only-id" } }"#);

    let result = config::load_from_file(Some(file.path().to_path_buf()));
    assert!(matches!(result, Err(CrmBridgeError::Config(_))));
}

#[test]
fn test_file_with_invalid_redirect_uri_fails_validation() {
    let file = write_config(
        ".toml",
        r#"
[hubspot]
client_id = "id"
client_secret = "secret"
redirect_uri = "localhost callback"
"#,
    );

    match config::load_from_file(Some(file.path().to_path_buf())) {
        Err(CrmBridgeError::Config(msg)) => assert!(msg.contains("redirect_uri")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_fails() {
    let file = write_config(".json", r#"{ "this is": "not valid json" "#);

    let result = config::load_from_file(Some(file.path().to_path_buf()));
    assert!(matches!(result, Err(CrmBridgeError::Config(_))));
}

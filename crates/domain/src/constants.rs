//! Integration constants
//!
//! Centralized location for provider endpoints, store key prefixes and TTLs.

// State store
pub const STATE_KEY_PREFIX: &str = "state";
pub const CREDENTIALS_KEY_PREFIX: &str = "credentials";
pub const STATE_TTL_SECONDS: u64 = 600;
pub const CREDENTIALS_TTL_SECONDS: u64 = 600;
pub const DEFAULT_STORE_MAX_CAPACITY: u64 = 10_000;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";

// HubSpot endpoints
pub const HUBSPOT_AUTHORIZE_URL: &str = "https://app.hubspot.com/oauth/authorize";
pub const HUBSPOT_TOKEN_URL: &str = "https://api.hubapi.com/oauth/v1/token";
pub const HUBSPOT_API_BASE_URL: &str = "https://api.hubapi.com";
pub const HUBSPOT_CONTACTS_PATH: &str = "/crm/v3/objects/contacts";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/integrations/hubspot/oauth2callback";
pub const DEFAULT_SCOPES: &[&str] = &[
    "oauth",
    "crm.objects.companies.read",
    "crm.schemas.contacts.read",
    "crm.objects.contacts.read",
];

// HTTP server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Page returned to the OAuth popup once the callback completes.
pub const CLOSE_WINDOW_HTML: &str = r"<html>
    <script>
        window.close();
    </script>
</html>";

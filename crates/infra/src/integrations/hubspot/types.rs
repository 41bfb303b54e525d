//! HubSpot wire types

use crmbridge_domain::ContactRecord;
use serde::{Deserialize, Serialize};

/// Body of `GET /crm/v3/objects/contacts`.
///
/// Only `results` is read; paging cursors are ignored.
#[derive(Debug, Deserialize)]
pub struct ContactsPage {
    #[serde(default)]
    pub results: Vec<ContactRecord>,
}

/// Form body posted to the token endpoint.
#[derive(Debug, Serialize)]
pub struct AuthorizationCodeGrant<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
    pub code: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_page_ignores_extra_fields() {
        let page: ContactsPage = serde_json::from_str(
            r#"{
                "results": [{
                    "id": "51",
                    "properties": {
                        "firstname": "Ada",
                        "lastname": "Lovelace",
                        "createdate": "2024-01-01T00:00:00Z",
                        "lastmodifieddate": "2024-02-01T00:00:00Z",
                        "hs_object_id": "51"
                    },
                    "createdAt": "2024-01-01T00:00:00Z",
                    "archived": false
                }],
                "paging": { "next": { "after": "52" } }
            }"#,
        )
        .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].properties.firstname.as_deref(), Some("Ada"));
    }

    #[test]
    fn missing_results_is_empty() {
        let page: ContactsPage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
    }
}

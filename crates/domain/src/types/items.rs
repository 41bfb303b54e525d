//! Contact records and the normalized item projection

use serde::{Deserialize, Serialize};

/// Provider-agnostic metadata item derived from a contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationItem {
    pub id: String,
    /// First and last name joined by a single space
    pub name: String,
    /// Opaque provider timestamp, copied verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    /// Opaque provider timestamp, copied verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<String>,
}

/// Contact record as returned by `GET /crm/v3/objects/contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    #[serde(default)]
    pub properties: ContactProperties,
}

/// Default property set HubSpot returns for a contact. Values can be `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProperties {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub createdate: Option<String>,
    #[serde(default)]
    pub lastmodifieddate: Option<String>,
}

/// Result of a contacts listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsFetch {
    /// 200 response, results in provider order
    Contacts(Vec<ContactRecord>),
    /// Non-200 response or transport failure
    UpstreamFailure { status: Option<u16>, message: String },
}

/// Named result of the item fetcher.
///
/// `UpstreamFailure` is kept distinct from an empty `Items` so callers can
/// tell "no contacts" apart from "could not ask"; [`ItemsOutcome::into_items`]
/// collapses both to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsOutcome {
    Items(Vec<IntegrationItem>),
    UpstreamFailure { status: Option<u16>, message: String },
}

impl ItemsOutcome {
    /// Items on success, an empty list on upstream failure.
    #[must_use]
    pub fn into_items(self) -> Vec<IntegrationItem> {
        match self {
            Self::Items(items) => items,
            Self::UpstreamFailure { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::UpstreamFailure { .. })
    }
}

//! Contact record -> normalized item mapping

use crmbridge_domain::{ContactRecord, IntegrationItem};

/// Project a contact record onto the provider-agnostic item shape.
#[must_use]
pub fn normalize_contact(record: ContactRecord) -> IntegrationItem {
    let ContactRecord { id, properties } = record;

    IntegrationItem {
        id,
        name: display_name(properties.firstname.as_deref(), properties.lastname.as_deref()),
        creation_time: properties.createdate,
        last_modified_time: properties.lastmodifieddate,
    }
}

/// Present name parts joined by a single space.
#[must_use]
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last].into_iter().flatten().collect::<Vec<_>>().join(" ")
}

//! State store key layout

use crmbridge_domain::constants::{CREDENTIALS_KEY_PREFIX, STATE_KEY_PREFIX};

/// `state:{org}:{user}`
#[must_use]
pub fn state_key(org_id: &str, user_id: &str) -> String {
    format!("{STATE_KEY_PREFIX}:{org_id}:{user_id}")
}

/// `credentials:{org}:{user}`
#[must_use]
pub fn credentials_key(org_id: &str, user_id: &str) -> String {
    format!("{CREDENTIALS_KEY_PREFIX}:{org_id}:{user_id}")
}

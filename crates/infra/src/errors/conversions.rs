//! Conversions from external infrastructure errors into domain errors.

use crmbridge_domain::CrmBridgeError;
#[cfg(feature = "redis")]
use redis::RedisError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CrmBridgeError);

impl From<InfraError> for CrmBridgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CrmBridgeError> for InfraError {
    fn from(value: CrmBridgeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCrmBridgeError {
    fn into_crmbridge(self) -> CrmBridgeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CrmBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoCrmBridgeError for HttpError {
    fn into_crmbridge(self) -> CrmBridgeError {
        if self.is_timeout() {
            return CrmBridgeError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CrmBridgeError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            // 4xx: the provider rejected the request
            return match code {
                400..=499 => CrmBridgeError::Upstream(message),
                _ => CrmBridgeError::Network(message),
            };
        }

        if self.is_builder() {
            return CrmBridgeError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return CrmBridgeError::Upstream(format!("unreadable provider response: {self}"));
        }

        CrmBridgeError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_crmbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* redis::RedisError → CrmBridgeError */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "redis")]
impl IntoCrmBridgeError for RedisError {
    fn into_crmbridge(self) -> CrmBridgeError {
        if self.is_timeout() {
            return CrmBridgeError::Store("redis operation timed out".into());
        }

        if self.is_connection_refusal() || self.is_connection_dropped() || self.is_io_error() {
            return CrmBridgeError::Store(format!("redis unavailable: {self}"));
        }

        CrmBridgeError::Store(format!("redis error: {self}"))
    }
}

#[cfg(feature = "redis")]
impl From<RedisError> for InfraError {
    fn from(value: RedisError) -> Self {
        InfraError(value.into_crmbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

//! Redis-backed state store
//!
//! Values are written with `SET EX`, so Redis handles expiry.

use async_trait::async_trait;
use crmbridge_core::StateStore;
use crmbridge_domain::{CrmBridgeError, Result};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::{info, trace};

use crate::errors::InfraError;

/// [`StateStore`] over a multiplexed Redis connection
#[derive(Clone)]
pub struct RedisStateStore {
    connection: ConnectionManager,
}

impl RedisStateStore {
    /// Open a managed connection to `url` (`redis://host:port/db`).
    ///
    /// # Errors
    /// `CrmBridgeError::Store` if the URL is invalid or Redis is unreachable.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(into_domain)?;
        let connection = ConnectionManager::new(client).await.map_err(into_domain)?;

        info!("redis state store connected");
        Ok(Self { connection })
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "redis get");
        let mut conn = self.connection.clone();
        conn.get::<_, Option<String>>(key).await.map_err(into_domain)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        trace!(key, ttl_seconds, "redis set");
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await.map_err(into_domain)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        trace!(key, "redis delete");
        let mut conn = self.connection.clone();
        conn.del::<_, i64>(key).await.map(|_| ()).map_err(into_domain)
    }
}

fn into_domain(err: redis::RedisError) -> CrmBridgeError {
    InfraError::from(err).into()
}

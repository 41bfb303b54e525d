//! State store backends
//!
//! [`MemoryStateStore`] keeps entries in-process; [`RedisStateStore`] (cargo
//! feature `redis`) shares them across instances.

pub mod memory;
#[cfg(feature = "redis")]
pub mod redis_store;

use std::sync::Arc;

use crmbridge_core::StateStore;
use crmbridge_domain::{Result, StateStoreConfig, StoreBackend};

pub use memory::MemoryStateStore;
#[cfg(feature = "redis")]
pub use redis_store::RedisStateStore;

/// Build the backend selected by `config`.
///
/// # Errors
/// - `Config` if Redis is selected but the crate was built without it
/// - `Store` if the Redis connection cannot be established
pub async fn build_state_store(config: &StateStoreConfig) -> Result<Arc<dyn StateStore>> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStateStore::new(config.max_capacity))),
        #[cfg(feature = "redis")]
        StoreBackend::Redis => Ok(Arc::new(RedisStateStore::connect(&config.redis_url).await?)),
        #[cfg(not(feature = "redis"))]
        StoreBackend::Redis => Err(crmbridge_domain::CrmBridgeError::Config(
            "redis store requested but crmbridge-infra was built without the `redis` feature"
                .into(),
        )),
    }
}

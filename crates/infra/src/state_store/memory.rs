//! In-process state store backed by moka
//!
//! Each entry carries its own TTL through a moka [`Expiry`] policy, so state
//! and credentials can expire on different schedules in one cache.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use crmbridge_core::StateStore;
use crmbridge_domain::Result;
use moka::future::Cache;
use moka::Expiry;
use tracing::trace;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires every entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Bounded in-memory [`StateStore`]
#[derive(Clone)]
pub struct MemoryStateStore {
    cache: Cache<String, Entry>,
}

impl MemoryStateStore {
    pub fn new(max_capacity: u64) -> Self {
        tracing::info!(max_capacity, "in-memory state store initialised");

        let cache = Cache::builder().max_capacity(max_capacity).expire_after(PerEntryTtl).build();
        Self { cache }
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.cache.get(key).await.map(|entry| entry.value);
        trace!(key, hit = value.is_some(), "state store get");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        trace!(key, ttl_seconds, "state store set");
        let entry = Entry { value: value.to_string(), ttl: Duration::from_secs(ttl_seconds) };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        trace!(key, "state store delete");
        self.cache.invalidate(key).await;
        Ok(())
    }
}

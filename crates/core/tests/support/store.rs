//! Fake state store with simulated expiry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crmbridge_core::StateStore;
use crmbridge_domain::{CrmBridgeError, Result as DomainResult};

/// Clock advanced by hand, shared between a test and its store.
#[derive(Clone, Default)]
pub struct ManualClock {
    now_secs: Arc<Mutex<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        *self.now_secs.lock().unwrap()
    }

    pub fn advance(&self, secs: u64) {
        *self.now_secs.lock().unwrap() += secs;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Get(String),
    Set { key: String, ttl_seconds: u64 },
    Delete(String),
}

/// In-memory `StateStore`; entries vanish once the clock passes their TTL.
pub struct FakeStateStore {
    clock: ManualClock,
    entries: Mutex<HashMap<String, (String, u64)>>,
    ops: Mutex<Vec<StoreOp>>,
    fail_writes: Mutex<bool>,
}

impl FakeStateStore {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            entries: Mutex::new(HashMap::new()),
            ops: Mutex::new(Vec::new()),
            fail_writes: Mutex::new(false),
        }
    }

    /// Make every subsequent `set` fail with a store error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Raw access that bypasses op recording, honouring expiry.
    pub fn peek(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(value, _)| value.clone())
    }

    /// Seed a value directly.
    pub fn insert(&self, key: &str, value: &str, ttl_seconds: u64) {
        let expires_at = self.clock.now() + ttl_seconds;
        self.entries.lock().unwrap().insert(key.to_string(), (value.to_string(), expires_at));
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().unwrap().clone()
    }

    pub fn ttl_of_last_set(&self, key: &str) -> Option<u64> {
        self.ops().into_iter().rev().find_map(|op| match op {
            StoreOp::Set { key: k, ttl_seconds } if k == key => Some(ttl_seconds),
            _ => None,
        })
    }
}

#[async_trait]
impl StateStore for FakeStateStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.ops.lock().unwrap().push(StoreOp::Get(key.to_string()));
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> DomainResult<()> {
        self.ops
            .lock()
            .unwrap()
            .push(StoreOp::Set { key: key.to_string(), ttl_seconds });
        if *self.fail_writes.lock().unwrap() {
            return Err(CrmBridgeError::Store("write rejected".into()));
        }
        self.insert(key, value, ttl_seconds);
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.ops.lock().unwrap().push(StoreOp::Delete(key.to_string()));
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

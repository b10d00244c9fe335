//! Cache store fakes
//!
//! `ClockedCacheStore` expires entries against `tokio::time::Instant`, so
//! tests running with a paused clock can step past a TTL deterministically.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use workpulse_core::CacheStore;
use workpulse_domain::{Result as DomainResult, WorkPulseError};

#[derive(Default)]
pub struct ClockedCacheStore {
    entries: Mutex<HashMap<String, (Vec<u8>, Instant)>>,
}

impl ClockedCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl CacheStore for ClockedCacheStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Vec<u8>>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(key)
            .filter(|(_, expires_at)| Instant::now() < *expires_at)
            .map(|(value, _)| value.clone()))
    }

    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl: Duration) -> DomainResult<()> {
        self.entries.lock().unwrap().insert(key.to_string(), (value, Instant::now() + ttl));
        Ok(())
    }
}

/// Store whose every operation fails, as an unreachable server would.
#[derive(Default)]
pub struct UnavailableCacheStore;

#[async_trait]
impl CacheStore for UnavailableCacheStore {
    async fn get(&self, _key: &str) -> DomainResult<Option<Vec<u8>>> {
        Err(WorkPulseError::Cache("connection refused".into()))
    }

    async fn set_ex(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> DomainResult<()> {
        Err(WorkPulseError::Cache("connection refused".into()))
    }
}

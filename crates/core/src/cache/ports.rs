//! Port interface for the shared response cache store

use std::time::Duration;

use async_trait::async_trait;
use workpulse_domain::Result;

/// Key/value store with per-entry expiry
///
/// Implementations report failures as `WorkPulseError::Cache`; the cache
/// layer absorbs them so they never reach a caller.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a live entry. Expired entries read as `None`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous entry, for `ttl`.
    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;
}

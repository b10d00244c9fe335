//! Response cache layer
//!
//! Expensive provider reads are wrapped in [`ResponseCache::cached`], which
//! serves a live entry when one exists and otherwise runs the producer and
//! stores its output with a TTL. The store is shared process-wide and a
//! failing store only costs a recomputation.

pub mod ports;

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use workpulse_domain::constants::{CACHE_KEY_PREFIX, DEFAULT_CACHE_TTL_SECS};
use workpulse_domain::Result;

use self::ports::CacheStore;

/// Cache key derived from a call signature
///
/// Rendered as `function-cache-prefix-{function}-[a, b]-{k=v, ...}` so that
/// keys written by one process stay valid for the next one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_call(function: &str, args: &[&str], kwargs: &[(&str, String)]) -> Self {
        let args = args.join(", ");
        let kwargs = kwargs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        Self(format!("{CACHE_KEY_PREFIX}-{function}-[{args}]-{{{kwargs}}}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hex SHA-256 of a credential, used in cache keys in place of the token.
pub fn credential_fingerprint(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Time-bounded cache over a shared [`CacheStore`]
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    default_ttl: Duration,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store, default_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS) }
    }

    /// Override the TTL used by [`ResponseCache::cached_default`].
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Return the cached bytes for `key`, or run `producer` and cache its output.
    ///
    /// Producer errors are returned unchanged and nothing is stored. Store
    /// errors on either side are logged and otherwise ignored.
    pub async fn cached<F, Fut>(&self, key: &CacheKey, ttl: Duration, producer: F) -> Result<Vec<u8>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>>>,
    {
        match self.store.get(key.as_str()).await {
            Ok(Some(bytes)) => {
                debug!(key = %key, "response cache hit");
                return Ok(bytes);
            }
            Ok(None) => debug!(key = %key, "response cache miss"),
            Err(err) => warn!(key = %key, error = %err, "response cache read failed; bypassing"),
        }

        let bytes = producer().await?;

        if let Err(err) = self.store.set_ex(key.as_str(), bytes.clone(), ttl).await {
            warn!(key = %key, error = %err, "response cache write failed");
        }

        Ok(bytes)
    }

    /// [`ResponseCache::cached`] with the configured default TTL.
    pub async fn cached_default<F, Fut>(&self, key: &CacheKey, producer: F) -> Result<Vec<u8>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<u8>>>,
    {
        self.cached(key, self.default_ttl, producer).await
    }
}

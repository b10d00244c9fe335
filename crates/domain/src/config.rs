//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CACHE_MAX_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_PROVIDER_TIMEOUT_SECS,
    YOUGILE_API_BASE_URL,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Which shared store backs the response cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    #[default]
    Memory,
    Redis,
}

/// Response cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,
    /// Required when `backend` is `redis`, e.g. `redis://redis:6379/0`.
    #[serde(default)]
    pub redis_url: Option<String>,
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
}

/// Upstream provider access configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_yougile_base_url")]
    pub yougile_base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_cache_ttl() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_MAX_CAPACITY
}

fn default_yougile_base_url() -> String {
    YOUGILE_API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_PROVIDER_TIMEOUT_SECS
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Memory,
            redis_url: None,
            ttl_seconds: DEFAULT_CACHE_TTL_SECS,
            max_capacity: DEFAULT_CACHE_MAX_CAPACITY,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            yougile_base_url: YOUGILE_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig { path: "workpulse.db".to_string(), pool_size: 8 },
            cache: CacheConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

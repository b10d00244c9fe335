//! Response cache store adapters
//!
//! Exactly one store is built at startup and shared by every provider
//! client through `Arc<dyn CacheStore>`.

pub mod memory;
pub mod redis;

pub use self::memory::MemoryCacheStore;
pub use self::redis::RedisCacheStore;

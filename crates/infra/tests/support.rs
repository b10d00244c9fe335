#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tempfile::TempDir;
use workpulse_core::ResponseCache;
use workpulse_infra::database::DbManager;
use workpulse_infra::{HttpClient, MemoryCacheStore};

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// In-process response cache with the given default TTL.
pub fn memory_cache(ttl: Duration) -> ResponseCache {
    ResponseCache::new(Arc::new(MemoryCacheStore::new(1_000))).with_default_ttl(ttl)
}

/// HTTP client with a short timeout suitable for mock servers.
pub fn test_http(timeout: Duration) -> HttpClient {
    HttpClient::builder().timeout(timeout).build().expect("http client should build")
}

/// A YouGile listing envelope.
pub fn yougile_page(content: Vec<Value>, count: u64, limit: u32, offset: u32, next: bool) -> Value {
    json!({
        "paging": { "count": count, "limit": limit, "offset": offset, "next": next },
        "content": content,
    })
}

/// A YouGile user record with id `U{n}`.
pub fn yougile_user(n: usize) -> Value {
    json!({
        "id": format!("U{n}"),
        "email": format!("user{n}@example.com"),
        "realName": format!("User {n}"),
        "isAdmin": false,
        "status": "online",
    })
}

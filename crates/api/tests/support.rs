#![allow(dead_code)]

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;
use workpulse_domain::{Config, DatabaseConfig, ProviderConfig};
use workpulse_lib::context::AppContext;

/// Application context over a temporary database, talking to `server` as its
/// YouGile endpoint.
pub struct TestApp {
    pub ctx: AppContext,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new(server: &MockServer) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary test directory");
        let config = Config {
            database: DatabaseConfig {
                path: temp_dir.path().join("workpulse.db").to_string_lossy().to_string(),
                pool_size: 4,
            },
            provider: ProviderConfig {
                yougile_base_url: format!("{}/api-v2", server.uri()),
                timeout_seconds: 2,
            },
            ..Config::default()
        };

        let ctx = AppContext::new(config).await.expect("failed to initialise AppContext");
        Self { ctx, _temp_dir: temp_dir }
    }
}

pub fn yougile_page(content: Vec<Value>, count: u64, offset: u32, next: bool) -> Value {
    json!({
        "paging": { "count": count, "limit": 50, "offset": offset, "next": next },
        "content": content,
    })
}

pub fn yougile_user(id: &str, real_name: &str) -> Value {
    json!({ "id": id, "email": format!("{}@example.com", id.to_lowercase()), "realName": real_name })
}

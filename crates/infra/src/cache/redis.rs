//! Redis cache store
//!
//! Uses a Redis `ConnectionManager`, which reconnects on its own, so one
//! store instance can be shared for the lifetime of the process.

use std::time::Duration;

use ::redis::aio::{ConnectionManager, ConnectionManagerConfig};
use ::redis::AsyncCommands;
use async_trait::async_trait;
use tracing::info;
use workpulse_core::CacheStore;
use workpulse_domain::{Result, WorkPulseError};

use crate::errors::InfraError;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(2);
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);
const RECONNECTION_RETRIES: usize = 2;

/// Upper bound for the initial connect, backoff between attempts included
pub const CONNECT_DEADLINE: Duration = Duration::from_secs(5);

/// Shared-server [`CacheStore`] backed by Redis `GET`/`SETEX`
#[derive(Clone)]
pub struct RedisCacheStore {
    manager: ConnectionManager,
}

impl RedisCacheStore {
    /// Connect to the server at `redis_url`.
    ///
    /// # Errors
    /// Returns `WorkPulseError::Cache` if the URL is invalid or the server
    /// cannot be reached within [`CONNECT_DEADLINE`].
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = ::redis::Client::open(redis_url).map_err(|e| {
            WorkPulseError::Cache(format!("Failed to create Redis client: {e}"))
        })?;

        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(CONNECTION_TIMEOUT)
            .set_response_timeout(RESPONSE_TIMEOUT)
            .set_number_of_retries(RECONNECTION_RETRIES);

        let manager =
            tokio::time::timeout(CONNECT_DEADLINE, ConnectionManager::new_with_config(client, config))
                .await
                .map_err(|_| {
                    WorkPulseError::Cache(format!(
                        "Redis connection not established within {}s",
                        CONNECT_DEADLINE.as_secs()
                    ))
                })?
                .map_err(|e| WorkPulseError::from(InfraError::from(e)))?;

        info!("Successfully connected to Redis");
        Ok(Self { manager })
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.manager.clone();
        let data: Option<Vec<u8>> =
            conn.get(key).await.map_err(|e| WorkPulseError::from(InfraError::from(e)))?;
        Ok(data)
    }

    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let mut conn = self.manager.clone();
        // SETEX rejects a zero expiry
        let ttl_secs = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| WorkPulseError::from(InfraError::from(e)))?;
        Ok(())
    }
}

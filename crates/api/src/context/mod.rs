//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use workpulse_core::{
    CacheStore, EmployeeRepository, MetricEngine, ProjectRepository, ProviderClientFactory,
    ReconciliationLocks, ResponseCache,
};
use workpulse_domain::{CacheBackend, CacheConfig, Config, Result};
use workpulse_infra::{
    config, DbManager, HttpProviderClientFactory, MemoryCacheStore, RedisCacheStore,
    SqliteEmployeeRepository, SqliteProjectRepository,
};

use crate::utils::health::{ComponentHealth, HealthStatus};

const HEALTH_PROBE_KEY: &str = "workpulse-health-probe";

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub projects: Arc<dyn ProjectRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub clients: Arc<dyn ProviderClientFactory>,
    pub metrics: MetricEngine,
    pub locks: Arc<ReconciliationLocks>,
    cache_store: Arc<dyn CacheStore>,
    cache_backend: CacheBackend,
}

impl AppContext {
    /// Create a new application context from the loaded configuration.
    ///
    /// Opens the database and applies the schema, then builds the one cache
    /// store shared by every provider client in the process.
    pub async fn new(config: Config) -> Result<Self> {
        config::validate(&config)?;

        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let projects: Arc<dyn ProjectRepository> =
            Arc::new(SqliteProjectRepository::new(Arc::clone(&db)));
        let employees: Arc<dyn EmployeeRepository> =
            Arc::new(SqliteEmployeeRepository::new(Arc::clone(&db)));

        let (cache_store, cache_backend) = build_cache_store(&config.cache).await;
        let cache = ResponseCache::new(Arc::clone(&cache_store))
            .with_default_ttl(Duration::from_secs(config.cache.ttl_seconds));

        let clients: Arc<dyn ProviderClientFactory> =
            Arc::new(HttpProviderClientFactory::new(config.provider.clone(), cache)?);
        let metrics = MetricEngine::new(Arc::clone(&clients));

        info!(
            db_path = %db.path().display(),
            cache_backend = ?cache_backend,
            yougile_base_url = %config.provider.yougile_base_url,
            "application context initialised"
        );

        Ok(Self {
            config,
            db,
            projects,
            employees,
            clients,
            metrics,
            locks: Arc::new(ReconciliationLocks::new()),
            cache_store,
            cache_backend,
        })
    }

    /// Backend actually serving the response cache.
    ///
    /// Differs from the configured backend when Redis was unreachable at
    /// startup.
    pub fn cache_backend(&self) -> CacheBackend {
        self.cache_backend
    }

    /// Check health of the database and the cache store.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_database_health().await)
            .add_component(self.check_cache_health().await);

        status.calculate_score();
        status
    }

    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(e)) => {
                warn!(error = %e, "database health check failed");
                ComponentHealth::unhealthy("database", format!("query failed: {e}"))
            }
            Err(e) => {
                tracing::error!(error = %e, "database health check task panicked");
                ComponentHealth::unhealthy("database", format!("task panic: {e}"))
            }
        }
    }

    async fn check_cache_health(&self) -> ComponentHealth {
        match self.cache_store.get(HEALTH_PROBE_KEY).await {
            Ok(_) => ComponentHealth::healthy("cache"),
            Err(e) => {
                warn!(error = %e, "cache health check failed");
                ComponentHealth::unhealthy("cache", e.to_string())
            }
        }
    }
}

/// Build the process-wide cache store.
///
/// An unreachable Redis server degrades to the in-process store; every
/// cached call would otherwise go straight to the provider anyway.
async fn build_cache_store(config: &CacheConfig) -> (Arc<dyn CacheStore>, CacheBackend) {
    let memory = || -> Arc<dyn CacheStore> { Arc::new(MemoryCacheStore::new(config.max_capacity)) };

    match (config.backend, config.redis_url.as_deref()) {
        (CacheBackend::Redis, Some(url)) => match RedisCacheStore::connect(url).await {
            Ok(store) => (Arc::new(store), CacheBackend::Redis),
            Err(e) => {
                warn!(error = %e, "redis cache unavailable, falling back to in-process cache");
                (memory(), CacheBackend::Memory)
            }
        },
        _ => (memory(), CacheBackend::Memory),
    }
}

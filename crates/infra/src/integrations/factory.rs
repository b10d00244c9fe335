//! Provider client factory
//!
//! Builds a provider client for a stored project's credential. All clients
//! share one HTTP connection pool and one response cache.

use std::sync::Arc;
use std::time::Duration;

use workpulse_core::{ProviderClient, ProviderClientFactory, ResponseCache};
use workpulse_domain::{ProviderConfig, ProviderType, Result};

use super::yougile::YouGileClient;
use crate::http::HttpClient;

pub struct HttpProviderClientFactory {
    http: HttpClient,
    cache: ResponseCache,
    config: ProviderConfig,
}

impl HttpProviderClientFactory {
    /// Build the shared HTTP client with the configured request timeout.
    pub fn new(config: ProviderConfig, cache: ResponseCache) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("workpulse/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, cache, config })
    }
}

impl ProviderClientFactory for HttpProviderClientFactory {
    fn client_for(&self, provider: ProviderType, token: &str) -> Result<Arc<dyn ProviderClient>> {
        match provider {
            ProviderType::YouGile => Ok(Arc::new(YouGileClient::new(
                self.http.clone(),
                self.cache.clone(),
                self.config.yougile_base_url.clone(),
                token,
            ))),
        }
    }
}

//! Metric contract and evaluation engine

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};
use workpulse_domain::{Project, ProviderType, Result};

use crate::projects::service::client_for_project;
use crate::provider::ports::{ProviderClient, ProviderClientFactory};

/// Two-phase metric: gather provider data, then compute a value from it.
///
/// `gather_params` is implemented once per provider variant, selected with an
/// exhaustive match on [`ProviderType`]. `compute` is pure.
#[async_trait]
pub trait Metric: Send + Sync {
    type Args: Send + Sync;
    type Params: Send;
    type Value;

    fn name(&self) -> &'static str;

    async fn gather_params(
        &self,
        provider: ProviderType,
        client: &dyn ProviderClient,
        args: &Self::Args,
    ) -> Result<Self::Params>;

    fn compute(&self, params: Self::Params) -> Self::Value;
}

/// Evaluates metrics against a project's provider
pub struct MetricEngine {
    clients: Arc<dyn ProviderClientFactory>,
}

impl MetricEngine {
    pub fn new(clients: Arc<dyn ProviderClientFactory>) -> Self {
        Self { clients }
    }

    /// Resolve the project's provider, gather parameters and compute.
    ///
    /// An unknown provider type fails with `Config` before any provider
    /// call is made; provider errors propagate unchanged.
    #[instrument(skip(self, metric, project, args), fields(metric = metric.name(), project_id = project.id))]
    pub async fn evaluate<M: Metric>(
        &self,
        metric: &M,
        project: &Project,
        args: &M::Args,
    ) -> Result<M::Value> {
        let (provider, client) = client_for_project(self.clients.as_ref(), project)?;
        let params = metric.gather_params(provider, client.as_ref(), args).await?;
        debug!(provider = %provider, "metric parameters gathered");
        Ok(metric.compute(params))
    }
}

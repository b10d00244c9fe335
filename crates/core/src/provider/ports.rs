//! Port interfaces for upstream project-tracking providers
//!
//! A provider client is bound to one credential at construction time. Every
//! listing is an idempotent read that returns one page; callers follow
//! `has_next` to walk the full result set.

use std::sync::Arc;

use async_trait::async_trait;
use workpulse_domain::{
    EmployeeFilter, Paginated, ProviderType, RemoteEmployee, Result, Task, TaskFilter,
};

/// Authenticated client for one provider account
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// List one page of tasks visible to the account.
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Paginated<Task>>;

    /// List one page of employees (users) visible to the account.
    async fn list_employees(&self, filter: &EmployeeFilter) -> Result<Paginated<RemoteEmployee>>;
}

/// Builds provider clients for a provider variant and credential
pub trait ProviderClientFactory: Send + Sync {
    fn client_for(&self, provider: ProviderType, token: &str) -> Result<Arc<dyn ProviderClient>>;
}

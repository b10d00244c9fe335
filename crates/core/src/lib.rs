//! # WorkPulse Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for providers, cache stores and repositories
//! - The response cache layer
//! - The metric engine and its metrics
//! - Project type services and employee reconciliation
//!
//! ## Architecture Principles
//! - Only depends on `workpulse-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod cache;
pub mod metrics;
pub mod projects;
pub mod provider;
pub mod utils;

pub use cache::ports::CacheStore;
pub use cache::{credential_fingerprint, CacheKey, ResponseCache};
pub use metrics::{CompleteTasksParams, CountOfCompleteTasks, Metric, MetricEngine};
pub use projects::ports::{EmployeeRepository, ProjectRepository};
pub use projects::{ProjectTypeService, ReconciliationLocks};
pub use provider::ports::{ProviderClient, ProviderClientFactory};
pub use utils::pagination::{collect_pages, CollectedPages};

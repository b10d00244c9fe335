//! Port interfaces for project and employee persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for local storage.

use async_trait::async_trait;
use workpulse_domain::{Employee, NewEmployee, NewProject, Project, Result};

/// Trait for project persistence and retrieval
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Get project by local ID
    async fn get_by_id(&self, id: i64) -> Result<Option<Project>>;

    /// List projects registered by one user
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Project>>;

    /// Create a new project
    async fn create(&self, project: NewProject) -> Result<Project>;

    /// Delete a project.
    ///
    /// Fails with `InvalidInput` while any employee still references it and
    /// with `NotFound` when no such project exists.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Owner of a project, for permission checks
    async fn find_owner(&self, project_id: i64) -> Result<Option<String>>;
}

/// Trait for employee persistence and retrieval
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>>;

    async fn list_by_project(&self, project_id: i64) -> Result<Vec<Employee>>;

    async fn find_by_project_and_key(
        &self,
        project_id: i64,
        remote_ref_id: &str,
    ) -> Result<Option<Employee>>;

    /// Write the provider-owned fields of existing employees in one transaction.
    async fn bulk_update(&self, employees: Vec<Employee>) -> Result<usize>;

    /// Insert new employees in one transaction.
    async fn bulk_create(&self, employees: Vec<NewEmployee>) -> Result<usize>;

    /// Apply an update batch, then a create batch.
    ///
    /// The two batches commit separately; a failed create batch leaves the
    /// update batch in place.
    async fn bulk_upsert(
        &self,
        updates: Vec<Employee>,
        creates: Vec<NewEmployee>,
    ) -> Result<(usize, usize)> {
        let updated = self.bulk_update(updates).await?;
        let created = self.bulk_create(creates).await?;
        Ok((updated, created))
    }
}

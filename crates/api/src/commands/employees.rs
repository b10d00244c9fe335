//! Employee commands

use tracing::info;
use workpulse_core::ProjectTypeService;
use workpulse_domain::{Employee, ReconciliationReport, Result, WorkPulseError};

use crate::context::AppContext;
use crate::utils::command_helpers::{ensure_project_owner, execute_logged};

/// Reconcile the project's employees with its provider.
pub async fn update_employees(
    ctx: &AppContext,
    user_id: &str,
    project_id: i64,
) -> Result<ReconciliationReport> {
    execute_logged("employees::update_employees", || async {
        ensure_project_owner(ctx, user_id, project_id).await?;
        let project = ctx
            .projects
            .get_by_id(project_id)
            .await?
            .ok_or_else(|| WorkPulseError::NotFound(format!("project {project_id}")))?;

        let report =
            ProjectTypeService::new(project, ctx.clients.clone(), ctx.employees.clone())
                .with_locks(ctx.locks.clone())
                .update_employees()
                .await?;

        info!(
            project_id,
            updated = report.updated,
            created = report.created,
            "employees reconciled"
        );
        Ok(report)
    })
    .await
}

/// Local employees of a project.
pub async fn list_employees(
    ctx: &AppContext,
    user_id: &str,
    project_id: i64,
) -> Result<Vec<Employee>> {
    execute_logged("employees::list_employees", || async {
        ensure_project_owner(ctx, user_id, project_id).await?;
        ctx.employees.list_by_project(project_id).await
    })
    .await
}

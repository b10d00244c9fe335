//! Metric commands

use workpulse_core::CountOfCompleteTasks;
use workpulse_domain::{Result, WorkPulseError};

use crate::context::AppContext;
use crate::utils::command_helpers::{ensure_project_owner, execute_logged};

/// Number of completed provider tasks assigned to the employee.
///
/// The caller must own the employee's project.
pub async fn count_of_complete_tasks(
    ctx: &AppContext,
    user_id: &str,
    employee_id: i64,
) -> Result<usize> {
    execute_logged("metrics::count_of_complete_tasks", || async {
        let employee = ctx
            .employees
            .get_by_id(employee_id)
            .await?
            .ok_or_else(|| WorkPulseError::NotFound(format!("employee {employee_id}")))?;

        ensure_project_owner(ctx, user_id, employee.project_id).await?;
        let project = ctx.projects.get_by_id(employee.project_id).await?.ok_or_else(|| {
            WorkPulseError::NotFound(format!("project {}", employee.project_id))
        })?;

        ctx.metrics.evaluate(&CountOfCompleteTasks, &project, &employee).await
    })
    .await
}

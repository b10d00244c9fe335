//! Project management commands

use workpulse_domain::{NewProject, Project, ProviderType, Result, WorkPulseError};

use crate::context::AppContext;
use crate::utils::command_helpers::{ensure_project_owner, execute_logged};

/// Register a provider account for `user_id`.
pub async fn create_project(
    ctx: &AppContext,
    user_id: &str,
    provider_type: ProviderType,
    token: &str,
) -> Result<Project> {
    execute_logged("projects::create_project", || async {
        let token = token.trim();
        if token.is_empty() {
            return Err(WorkPulseError::InvalidInput("provider token must not be empty".into()));
        }

        ctx.projects
            .create(NewProject {
                provider_type,
                token: token.to_string(),
                owner_id: user_id.to_string(),
            })
            .await
    })
    .await
}

/// Projects owned by `user_id`.
pub async fn list_projects(ctx: &AppContext, user_id: &str) -> Result<Vec<Project>> {
    execute_logged("projects::list_projects", || async {
        ctx.projects.list_by_owner(user_id).await
    })
    .await
}

/// Delete a project that no employee references.
pub async fn delete_project(ctx: &AppContext, user_id: &str, project_id: i64) -> Result<()> {
    execute_logged("projects::delete_project", || async {
        ensure_project_owner(ctx, user_id, project_id).await?;
        ctx.projects.delete(project_id).await
    })
    .await
}

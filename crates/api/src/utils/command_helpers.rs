//! Command execution helpers
//!
//! Timing, outcome logging and ownership checks shared by every command.

use std::future::Future;
use std::time::Instant;

use workpulse_domain::{Result as DomainResult, WorkPulseError};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Run a command body, timing it and logging the outcome.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn my_command(ctx: &AppContext, user_id: &str) -> Result<MyResponse> {
///     execute_logged("my_module::my_command", || async {
///         ensure_project_owner(ctx, user_id, 42).await?;
///         ctx.some_service.do_something().await
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(WorkPulseError::label);
    log_command_execution(command_name, start.elapsed(), error_type);

    result
}

/// Fail with `Auth` unless `user_id` owns `project_id`.
///
/// A missing project is `NotFound`, checked before ownership.
pub async fn ensure_project_owner(
    ctx: &AppContext,
    user_id: &str,
    project_id: i64,
) -> DomainResult<()> {
    match ctx.projects.find_owner(project_id).await? {
        None => Err(WorkPulseError::NotFound(format!("project {project_id}"))),
        Some(owner) if owner == user_id => Ok(()),
        Some(_) => Err(WorkPulseError::Auth(format!(
            "user {user_id} does not own project {project_id}"
        ))),
    }
}

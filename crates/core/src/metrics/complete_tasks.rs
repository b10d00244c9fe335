//! Count of completed tasks assigned to an employee

use async_trait::async_trait;
use workpulse_domain::constants::DEFAULT_PAGE_SIZE;
use workpulse_domain::{Employee, ProviderType, Result, Task, TaskFilter};

use super::engine::Metric;
use crate::provider::ports::ProviderClient;
use crate::utils::pagination::collect_pages;

/// Gathered input for [`CountOfCompleteTasks`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTasksParams {
    pub employee: Employee,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountOfCompleteTasks;

impl CountOfCompleteTasks {
    async fn gather_yougile(
        &self,
        client: &dyn ProviderClient,
        employee: &Employee,
    ) -> Result<CompleteTasksParams> {
        // Assignee filtering happens client-side; the task listing has no
        // assignee parameter.
        let fetched = collect_pages(DEFAULT_PAGE_SIZE, |limit, offset| async move {
            client.list_tasks(&TaskFilter::page(limit, offset)).await
        })
        .await?;

        Ok(CompleteTasksParams { employee: employee.clone(), tasks: fetched.items })
    }
}

#[async_trait]
impl Metric for CountOfCompleteTasks {
    type Args = Employee;
    type Params = CompleteTasksParams;
    type Value = usize;

    fn name(&self) -> &'static str {
        "count_of_complete_tasks"
    }

    async fn gather_params(
        &self,
        provider: ProviderType,
        client: &dyn ProviderClient,
        employee: &Employee,
    ) -> Result<CompleteTasksParams> {
        match provider {
            ProviderType::YouGile => self.gather_yougile(client, employee).await,
        }
    }

    fn compute(&self, params: CompleteTasksParams) -> usize {
        let key = params.employee.remote_ref_id.as_str();
        params.tasks.iter().filter(|task| task.completed && task.is_assigned_to(key)).count()
    }
}

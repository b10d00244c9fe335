//! Project type service - binds a stored project to its provider

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, instrument};
use workpulse_domain::constants::EMPLOYEE_SYNC_PAGE_SIZE;
use workpulse_domain::{
    Employee, EmployeeFilter, NewEmployee, Project, ProviderType, ReconciliationReport,
    RemoteEmployee, Result,
};

use super::locks::ReconciliationLocks;
use super::ports::EmployeeRepository;
use crate::provider::ports::{ProviderClient, ProviderClientFactory};
use crate::utils::pagination::collect_pages;

/// Resolve the provider of `project` and build a client for its credential.
pub(crate) fn client_for_project(
    clients: &dyn ProviderClientFactory,
    project: &Project,
) -> Result<(ProviderType, Arc<dyn ProviderClient>)> {
    let provider = project.provider()?;
    let client = clients.client_for(provider, project.credential())?;
    Ok((provider, client))
}

/// Provider strategy for one stored project
pub struct ProjectTypeService {
    project: Project,
    clients: Arc<dyn ProviderClientFactory>,
    employees: Arc<dyn EmployeeRepository>,
    locks: Option<Arc<ReconciliationLocks>>,
}

impl ProjectTypeService {
    pub fn new(
        project: Project,
        clients: Arc<dyn ProviderClientFactory>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self { project, clients, employees, locks: None }
    }

    /// Serialize reconciliations of the same project through `locks`.
    pub fn with_locks(mut self, locks: Arc<ReconciliationLocks>) -> Self {
        self.locks = Some(locks);
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Credential used for provider calls.
    pub fn get_token(&self) -> &str {
        self.project.credential()
    }

    pub fn provider_type(&self) -> Result<ProviderType> {
        self.project.provider()
    }

    /// Build a provider client bound to [`ProjectTypeService::get_token`].
    pub fn get_client(&self) -> Result<Arc<dyn ProviderClient>> {
        client_for_project(self.clients.as_ref(), &self.project).map(|(_, client)| client)
    }

    /// Reconcile local employees of this project with the provider's list.
    ///
    /// Existing employees (matched by remote ref id) get their email, name
    /// and project overwritten; unknown ones are created. Nothing is deleted.
    /// Updates and creations are written after every page has been read.
    #[instrument(skip(self), fields(project_id = self.project.id))]
    pub async fn update_employees(&self) -> Result<ReconciliationReport> {
        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(self.project.id).await),
            None => None,
        };

        let client = self.get_client()?;
        let project_id = self.project.id;

        let mut existing: HashMap<String, Employee> = self
            .employees
            .list_by_project(project_id)
            .await?
            .into_iter()
            .map(|employee| (employee.remote_ref_id.clone(), employee))
            .collect();

        let fetched = collect_pages(EMPLOYEE_SYNC_PAGE_SIZE, |limit, offset| {
            let client = Arc::clone(&client);
            async move { client.list_employees(&EmployeeFilter::page(limit, offset)).await }
        })
        .await?;

        let mut plan = ReconciliationPlan::default();
        for remote in &fetched.items {
            plan.stage(&mut existing, remote, project_id);
        }
        let (updates, creates) = plan.into_batches(&mut existing);

        let (updated, created) = self.employees.bulk_upsert(updates, creates).await?;

        let report = ReconciliationReport { pages_fetched: fetched.pages, updated, created };
        info!(
            pages = report.pages_fetched,
            updated = report.updated,
            created = report.created,
            "employee reconciliation finished"
        );
        Ok(report)
    }
}

/// Staged writes for one reconciliation run, deduplicated by remote ref id
#[derive(Default)]
struct ReconciliationPlan {
    updated_keys: Vec<String>,
    seen_updates: HashSet<String>,
    creates: Vec<NewEmployee>,
    create_index: HashMap<String, usize>,
}

impl ReconciliationPlan {
    fn stage(
        &mut self,
        existing: &mut HashMap<String, Employee>,
        remote: &RemoteEmployee,
        project_id: i64,
    ) {
        if let Some(employee) = existing.get_mut(&remote.remote_ref_id) {
            employee.apply_remote(remote, project_id);
            if self.seen_updates.insert(remote.remote_ref_id.clone()) {
                self.updated_keys.push(remote.remote_ref_id.clone());
            }
            return;
        }

        let staged = NewEmployee::from_remote(remote, project_id);
        match self.create_index.get(&remote.remote_ref_id) {
            Some(&index) => self.creates[index] = staged,
            None => {
                self.create_index.insert(remote.remote_ref_id.clone(), self.creates.len());
                self.creates.push(staged);
            }
        }
    }

    fn into_batches(
        self,
        existing: &mut HashMap<String, Employee>,
    ) -> (Vec<Employee>, Vec<NewEmployee>) {
        let updates =
            self.updated_keys.iter().filter_map(|key| existing.remove(key)).collect::<Vec<_>>();
        (updates, self.creates)
    }
}

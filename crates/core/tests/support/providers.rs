//! Scripted provider client and factory
//!
//! The client pages an in-memory dataset exactly like a provider would:
//! `has_next` is true while items remain past `offset + limit`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use workpulse_core::{ProviderClient, ProviderClientFactory};
use workpulse_domain::{
    EmployeeFilter, Paginated, ProviderType, RemoteEmployee, Result as DomainResult, Task,
    TaskFilter, WorkPulseError,
};

/// Offsets requested from a scripted client, per listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordedCalls {
    pub tasks: Vec<(u32, u32)>,
    pub employees: Vec<(u32, u32)>,
}

#[derive(Default)]
pub struct ScriptedProviderClient {
    employees: Mutex<Vec<RemoteEmployee>>,
    tasks: Mutex<Vec<Task>>,
    failure: Mutex<Option<WorkPulseError>>,
    calls: Mutex<RecordedCalls>,
}

impl ScriptedProviderClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(self, employees: Vec<RemoteEmployee>) -> Self {
        *self.employees.lock().unwrap() = employees;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.lock().unwrap() = tasks;
        self
    }

    /// Make every subsequent listing fail with `error`.
    pub fn fail_with(&self, error: WorkPulseError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn replace_employees(&self, employees: Vec<RemoteEmployee>) {
        *self.employees.lock().unwrap() = employees;
    }

    pub fn calls(&self) -> RecordedCalls {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> DomainResult<()> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn page_of<T: Clone>(all: &[T], limit: u32, offset: u32) -> Paginated<T> {
    let start = (offset as usize).min(all.len());
    let end = (start + limit as usize).min(all.len());
    Paginated {
        items: all[start..end].to_vec(),
        total_count: all.len() as u64,
        page_size: limit,
        page_offset: offset,
        has_next: end < all.len(),
    }
}

#[async_trait]
impl ProviderClient for ScriptedProviderClient {
    async fn list_tasks(&self, filter: &TaskFilter) -> DomainResult<Paginated<Task>> {
        self.calls.lock().unwrap().tasks.push((filter.limit, filter.offset));
        self.check_failure()?;
        Ok(page_of(&self.tasks.lock().unwrap(), filter.limit, filter.offset))
    }

    async fn list_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> DomainResult<Paginated<RemoteEmployee>> {
        self.calls.lock().unwrap().employees.push((filter.limit, filter.offset));
        self.check_failure()?;
        Ok(page_of(&self.employees.lock().unwrap(), filter.limit, filter.offset))
    }
}

/// Factory that hands out one shared scripted client.
pub struct StaticClientFactory {
    client: Arc<ScriptedProviderClient>,
    requests: Mutex<Vec<(ProviderType, String)>>,
}

impl StaticClientFactory {
    pub fn new(client: Arc<ScriptedProviderClient>) -> Self {
        Self { client, requests: Mutex::new(Vec::new()) }
    }

    /// `(provider, token)` pairs clients were requested for.
    pub fn requests(&self) -> Vec<(ProviderType, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ProviderClientFactory for StaticClientFactory {
    fn client_for(
        &self,
        provider: ProviderType,
        token: &str,
    ) -> DomainResult<Arc<dyn ProviderClient>> {
        self.requests.lock().unwrap().push((provider, token.to_string()));
        Ok(self.client.clone())
    }
}

pub fn remote_employees(count: usize) -> Vec<RemoteEmployee> {
    (0..count)
        .map(|n| RemoteEmployee {
            remote_ref_id: format!("remote-{n:03}"),
            email: format!("employee{n}@example.com"),
            display_name: format!("Employee {n}"),
        })
        .collect()
}

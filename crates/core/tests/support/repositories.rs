//! In-memory employee repository
//!
//! Mirrors the storage contract closely enough for reconciliation tests:
//! remote ref ids are unique across all projects and every bulk call is
//! recorded.

use std::sync::Mutex;

use async_trait::async_trait;
use workpulse_core::EmployeeRepository;
use workpulse_domain::{Employee, NewEmployee, Result as DomainResult, WorkPulseError};

#[derive(Default)]
struct State {
    employees: Vec<Employee>,
    next_id: i64,
    bulk_updates: Vec<usize>,
    bulk_creates: Vec<usize>,
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    state: Mutex<State>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(employees: Vec<Employee>) -> Self {
        let next_id = employees.iter().map(|e| e.id).max().unwrap_or(0);
        Self { state: Mutex::new(State { employees, next_id, ..State::default() }) }
    }

    pub fn all(&self) -> Vec<Employee> {
        self.state.lock().unwrap().employees.clone()
    }

    /// Batch sizes passed to `bulk_update` and `bulk_create`, in call order.
    pub fn batch_sizes(&self) -> (Vec<usize>, Vec<usize>) {
        let state = self.state.lock().unwrap();
        (state.bulk_updates.clone(), state.bulk_creates.clone())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn get_by_id(&self, id: i64) -> DomainResult<Option<Employee>> {
        Ok(self.state.lock().unwrap().employees.iter().find(|e| e.id == id).cloned())
    }

    async fn list_by_project(&self, project_id: i64) -> DomainResult<Vec<Employee>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .employees
            .iter()
            .filter(|e| e.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_project_and_key(
        &self,
        project_id: i64,
        remote_ref_id: &str,
    ) -> DomainResult<Option<Employee>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .employees
            .iter()
            .find(|e| e.project_id == project_id && e.remote_ref_id == remote_ref_id)
            .cloned())
    }

    async fn bulk_update(&self, employees: Vec<Employee>) -> DomainResult<usize> {
        let mut state = self.state.lock().unwrap();
        state.bulk_updates.push(employees.len());
        for updated in &employees {
            if let Some(slot) = state.employees.iter_mut().find(|e| e.id == updated.id) {
                *slot = updated.clone();
            }
        }
        Ok(employees.len())
    }

    async fn bulk_create(&self, employees: Vec<NewEmployee>) -> DomainResult<usize> {
        let mut state = self.state.lock().unwrap();
        state.bulk_creates.push(employees.len());
        for staged in &employees {
            if state.employees.iter().any(|e| e.remote_ref_id == staged.remote_ref_id) {
                return Err(WorkPulseError::Database(format!(
                    "UNIQUE constraint failed: employees.remote_ref_id ({})",
                    staged.remote_ref_id
                )));
            }
        }
        for staged in employees.iter().cloned() {
            state.next_id += 1;
            let id = state.next_id;
            state.employees.push(Employee {
                id,
                remote_ref_id: staged.remote_ref_id,
                email: staged.email,
                name: staged.name,
                project_id: staged.project_id,
            });
        }
        Ok(employees.len())
    }
}

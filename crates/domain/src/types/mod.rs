//! Domain types and models

pub mod employee;
pub mod filters;
pub mod pagination;
pub mod project;
pub mod task;

pub use employee::{Employee, NewEmployee, ReconciliationReport, RemoteEmployee};
pub use filters::{EmployeeFilter, TaskFilter};
pub use pagination::Paginated;
pub use project::{NewProject, Project, ProviderType};
pub use task::Task;

//! Application commands
//!
//! Each command takes the caller's user id, checks ownership of the project
//! it touches, and logs one `command_execution_*` record.

pub mod employees;
pub mod health;
pub mod metrics;
pub mod projects;

pub use employees::{list_employees, update_employees};
pub use health::get_app_health;
pub use metrics::count_of_complete_tasks;
pub use projects::{create_project, delete_project, list_projects};

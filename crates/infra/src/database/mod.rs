//! Database implementations

pub mod employee_repository;
pub mod manager;
pub mod project_repository;

pub use employee_repository::SqliteEmployeeRepository;
pub use manager::{DbManager, SqliteConnection};
pub use project_repository::SqliteProjectRepository;

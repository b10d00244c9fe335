//! Employee repository implementation using SQLite
//!
//! Bulk writes run inside one transaction each, so a reconciliation run
//! commits its update batch and its create batch separately.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::debug;
use workpulse_core::EmployeeRepository as EmployeeRepositoryPort;
use workpulse_domain::{Employee, NewEmployee, Result as DomainResult};

use super::manager::{map_join_error, map_sql_error, DbManager};

const EMPLOYEE_COLUMNS: &str = "id, remote_ref_id, email, name, project_id";

/// SQLite-backed implementation of `EmployeeRepository`
pub struct SqliteEmployeeRepository {
    db: Arc<DbManager>,
}

impl SqliteEmployeeRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepositoryPort for SqliteEmployeeRepository {
    async fn get_by_id(&self, id: i64) -> DomainResult<Option<Employee>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Employee>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?1"),
                params![id],
                map_employee_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_by_project(&self, project_id: i64) -> DomainResult<Vec<Employee>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Employee>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE project_id = ?1 ORDER BY id"
                ))
                .map_err(map_sql_error)?;
            let rows = stmt.query_map(params![project_id], map_employee_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_project_and_key(
        &self,
        project_id: i64,
        remote_ref_id: &str,
    ) -> DomainResult<Option<Employee>> {
        let db = Arc::clone(&self.db);
        let remote_ref_id = remote_ref_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Employee>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!(
                    "SELECT {EMPLOYEE_COLUMNS} FROM employees
                     WHERE project_id = ?1 AND remote_ref_id = ?2"
                ),
                params![project_id, &remote_ref_id],
                map_employee_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn bulk_update(&self, employees: Vec<Employee>) -> DomainResult<usize> {
        if employees.is_empty() {
            return Ok(0);
        }
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<usize> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;
            {
                let mut stmt = tx
                    .prepare("UPDATE employees SET email = ?1, name = ?2, project_id = ?3 WHERE id = ?4")
                    .map_err(map_sql_error)?;
                for employee in &employees {
                    stmt.execute(params![
                        &employee.email,
                        &employee.name,
                        employee.project_id,
                        employee.id
                    ])
                    .map_err(map_sql_error)?;
                }
            }
            tx.commit().map_err(map_sql_error)?;

            debug!(count = employees.len(), "employees updated");
            Ok(employees.len())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn bulk_create(&self, employees: Vec<NewEmployee>) -> DomainResult<usize> {
        if employees.is_empty() {
            return Ok(0);
        }
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<usize> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;
            {
                let mut stmt = tx
                    .prepare(
                        "INSERT INTO employees (remote_ref_id, email, name, project_id)
                         VALUES (?1, ?2, ?3, ?4)",
                    )
                    .map_err(map_sql_error)?;
                for employee in &employees {
                    stmt.execute(params![
                        &employee.remote_ref_id,
                        &employee.email,
                        &employee.name,
                        employee.project_id
                    ])
                    .map_err(map_sql_error)?;
                }
            }
            tx.commit().map_err(map_sql_error)?;

            debug!(count = employees.len(), "employees created");
            Ok(employees.len())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_employee_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        remote_ref_id: row.get(1)?,
        email: row.get(2)?,
        name: row.get(3)?,
        project_id: row.get(4)?,
    })
}

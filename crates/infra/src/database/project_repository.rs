//! Project repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::info;
use workpulse_core::ProjectRepository as ProjectRepositoryPort;
use workpulse_domain::{NewProject, Project, Result as DomainResult, WorkPulseError};

use super::manager::{map_join_error, map_sql_error, DbManager};

/// SQLite-backed implementation of `ProjectRepository`
pub struct SqliteProjectRepository {
    db: Arc<DbManager>,
}

impl SqliteProjectRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepositoryPort for SqliteProjectRepository {
    async fn get_by_id(&self, id: i64) -> DomainResult<Option<Project>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Project>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT id, provider_type, token, owner_id FROM projects WHERE id = ?1",
                params![id],
                map_project_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<Project>> {
        let db = Arc::clone(&self.db);
        let owner_id = owner_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Project>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, provider_type, token, owner_id FROM projects
                     WHERE owner_id = ?1 ORDER BY id",
                )
                .map_err(map_sql_error)?;
            let rows = stmt.query_map(params![&owner_id], map_project_row).map_err(map_sql_error)?;
            rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create(&self, project: NewProject) -> DomainResult<Project> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Project> {
            let conn = db.get_connection()?;
            let provider_type = project.provider_type.to_string();
            conn.execute(
                "INSERT INTO projects (provider_type, token, owner_id) VALUES (?1, ?2, ?3)",
                params![&provider_type, &project.token, &project.owner_id],
            )
            .map_err(map_sql_error)?;

            let id = conn.last_insert_rowid();
            info!(project_id = id, provider_type = %provider_type, "project created");
            Ok(Project { id, provider_type, token: project.token, owner_id: project.owner_id })
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            let referencing: i64 = tx
                .query_row(
                    "SELECT COUNT(*) FROM employees WHERE project_id = ?1",
                    params![id],
                    |row| row.get(0),
                )
                .map_err(map_sql_error)?;
            if referencing > 0 {
                return Err(WorkPulseError::InvalidInput(format!(
                    "project {id} is referenced by {referencing} employees and cannot be deleted"
                )));
            }

            let deleted =
                tx.execute("DELETE FROM projects WHERE id = ?1", params![id]).map_err(map_sql_error)?;
            if deleted == 0 {
                return Err(WorkPulseError::NotFound(format!("project {id}")));
            }

            tx.commit().map_err(map_sql_error)?;
            info!(project_id = id, "project deleted");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_owner(&self, project_id: i64) -> DomainResult<Option<String>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<String>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT owner_id FROM projects WHERE id = ?1",
                params![project_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_project_row(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        provider_type: row.get(1)?,
        token: row.get(2)?,
        owner_id: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use workpulse_domain::ProviderType;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("temp dir created");
        let db = DbManager::new(temp_dir.path().join("test.db"), 4).expect("manager created");
        db.run_migrations().expect("migrations run");
        (Arc::new(db), temp_dir)
    }

    fn new_project(owner: &str) -> NewProject {
        NewProject {
            provider_type: ProviderType::YouGile,
            token: format!("token-for-{owner}"),
            owner_id: owner.into(),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_then_get_round_trips() {
        let (db, _dir) = setup_test_db();
        let repo = SqliteProjectRepository::new(db);

        let created = repo.create(new_project("alice")).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().expect("project exists");

        assert_eq!(fetched, created);
        assert_eq!(fetched.provider_type, "yougile");
        assert_eq!(fetched.token, "token-for-alice");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_by_owner_filters_other_users() {
        let (db, _dir) = setup_test_db();
        let repo = SqliteProjectRepository::new(db);

        repo.create(new_project("alice")).await.unwrap();
        repo.create(new_project("bob")).await.unwrap();
        repo.create(new_project("alice")).await.unwrap();

        let projects = repo.list_by_owner("alice").await.unwrap();
        assert_eq!(projects.len(), 2);
        assert!(projects.iter().all(|p| p.owner_id == "alice"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn find_owner_of_missing_project_is_none() {
        let (db, _dir) = setup_test_db();
        let repo = SqliteProjectRepository::new(db);

        let created = repo.create(new_project("alice")).await.unwrap();

        assert_eq!(repo.find_owner(created.id).await.unwrap().as_deref(), Some("alice"));
        assert_eq!(repo.find_owner(created.id + 100).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_is_blocked_while_employees_reference_the_project() {
        let (db, _dir) = setup_test_db();
        let repo = SqliteProjectRepository::new(Arc::clone(&db));
        let project = repo.create(new_project("alice")).await.unwrap();

        db.get_connection()
            .unwrap()
            .execute(
                "INSERT INTO employees (remote_ref_id, email, name, project_id) VALUES ('E1', 'e1@example.com', 'E1', ?1)",
                params![project.id],
            )
            .unwrap();

        let err = repo.delete(project.id).await.unwrap_err();
        assert!(matches!(err, WorkPulseError::InvalidInput(_)));
        assert!(repo.get_by_id(project.id).await.unwrap().is_some());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_unreferenced_project() {
        let (db, _dir) = setup_test_db();
        let repo = SqliteProjectRepository::new(db);
        let project = repo.create(new_project("alice")).await.unwrap();

        repo.delete(project.id).await.unwrap();

        assert!(repo.get_by_id(project.id).await.unwrap().is_none());
        assert!(matches!(repo.delete(project.id).await, Err(WorkPulseError::NotFound(_))));
    }
}

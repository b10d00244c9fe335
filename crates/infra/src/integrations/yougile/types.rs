//! YouGile API wire types and normalization

use serde::Deserialize;
use workpulse_domain::{Paginated, RemoteEmployee, Result, Task, WorkPulseError};

/// Paging envelope returned by every YouGile listing
#[derive(Debug, Deserialize)]
pub(crate) struct YouGilePage<T> {
    pub paging: YouGilePaging,
    pub content: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct YouGilePaging {
    pub count: u64,
    pub limit: u32,
    pub offset: u32,
    pub next: bool,
}

/// Assignee field: a bare id when one user is assigned, a list otherwise
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Assigned {
    One(String),
    Many(Vec<String>),
}

impl Default for Assigned {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<Assigned> for Vec<String> {
    fn from(value: Assigned) -> Self {
        match value {
            Assigned::One(id) => vec![id],
            Assigned::Many(ids) => ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct YouGileTask {
    pub completed: bool,
    #[serde(default)]
    pub assigned: Assigned,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct YouGileUser {
    pub id: String,
    pub email: String,
    pub real_name: String,
}

impl From<YouGileTask> for Task {
    fn from(task: YouGileTask) -> Self {
        Task { completed: task.completed, assigned_remote_ids: task.assigned.into() }
    }
}

impl From<YouGileUser> for RemoteEmployee {
    fn from(user: YouGileUser) -> Self {
        RemoteEmployee { remote_ref_id: user.id, email: user.email, display_name: user.real_name }
    }
}

impl<T> YouGilePage<T> {
    fn into_domain<U: From<T>>(self) -> Paginated<U> {
        Paginated {
            items: self.content.into_iter().map(U::from).collect(),
            total_count: self.paging.count,
            page_size: self.paging.limit,
            page_offset: self.paging.offset,
            has_next: self.paging.next,
        }
    }
}

/// Parse a raw `/tasks` response body.
///
/// # Errors
/// Returns `WorkPulseError::Schema` when the body is not a task page.
pub fn parse_tasks(body: &[u8]) -> Result<Paginated<Task>> {
    parse_page::<YouGileTask, Task>(body, "tasks")
}

/// Parse a raw `/users` response body.
///
/// # Errors
/// Returns `WorkPulseError::Schema` when the body is not a user page.
pub fn parse_employees(body: &[u8]) -> Result<Paginated<RemoteEmployee>> {
    parse_page::<YouGileUser, RemoteEmployee>(body, "users")
}

fn parse_page<W, U>(body: &[u8], listing: &str) -> Result<Paginated<U>>
where
    W: for<'de> Deserialize<'de>,
    U: From<W>,
{
    serde_json::from_slice::<YouGilePage<W>>(body)
        .map(YouGilePage::into_domain)
        .map_err(|e| WorkPulseError::Schema(format!("invalid YouGile {listing} page: {e}")))
}

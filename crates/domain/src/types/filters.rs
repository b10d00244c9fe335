//! Listing filters passed to provider clients
//!
//! Optional fields are omitted from the upstream query when `None`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;

/// Task listing filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub column_id: Option<String>,
    pub include_deleted: Option<bool>,
    pub limit: u32,
    pub offset: u32,
    pub title: Option<String>,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self { column_id: None, include_deleted: None, limit: DEFAULT_PAGE_SIZE, offset: 0, title: None }
    }
}

impl TaskFilter {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self { limit, offset, ..Self::default() }
    }
}

/// Employee listing filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    pub email: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub project_id: Option<String>,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self { email: None, limit: DEFAULT_PAGE_SIZE, offset: 0, project_id: None }
    }
}

impl EmployeeFilter {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self { limit, offset, ..Self::default() }
    }
}

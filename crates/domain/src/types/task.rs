//! Provider-side task records
//!
//! Tasks are transient: they are fetched for a metric run and never persisted.

use serde::{Deserialize, Serialize};

/// Task as seen by metrics
///
/// `assigned_remote_ids` is always a sequence; provider adapters normalize
/// single-assignee shapes before a `Task` is built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Task {
    pub completed: bool,
    pub assigned_remote_ids: Vec<String>,
}

impl Task {
    pub fn is_assigned_to(&self, remote_ref_id: &str) -> bool {
        self.assigned_remote_ids.iter().any(|id| id == remote_ref_id)
    }
}

//! Employee types
//!
//! Local employees are only ever written by reconciliation against the
//! provider's employee list; `remote_ref_id` is the join key and is unique
//! across the whole store.

use serde::{Deserialize, Serialize};

/// Employee stored locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub remote_ref_id: String,
    pub email: String,
    pub name: String,
    pub project_id: i64,
}

impl Employee {
    /// Overwrite the provider-owned fields with the remote record.
    pub fn apply_remote(&mut self, remote: &RemoteEmployee, project_id: i64) {
        self.email.clone_from(&remote.email);
        self.name.clone_from(&remote.display_name);
        self.project_id = project_id;
    }
}

/// Employee staged for insertion (no local id yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub remote_ref_id: String,
    pub email: String,
    pub name: String,
    pub project_id: i64,
}

impl NewEmployee {
    pub fn from_remote(remote: &RemoteEmployee, project_id: i64) -> Self {
        Self {
            remote_ref_id: remote.remote_ref_id.clone(),
            email: remote.email.clone(),
            name: remote.display_name.clone(),
            project_id,
        }
    }
}

/// Employee as reported by a provider, already normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEmployee {
    pub remote_ref_id: String,
    pub email: String,
    pub display_name: String,
}

/// Outcome of one employee reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub pages_fetched: usize,
    pub updated: usize,
    pub created: usize,
}

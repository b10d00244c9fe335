//! Per-project reconciliation locks
//!
//! Serializes employee reconciliation for one project inside this process.
//! Separate processes sharing a database are not coordinated.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct ReconciliationLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl ReconciliationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `project_id`.
    pub async fn acquire(&self, project_id: i64) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(project_id).or_default().clone();
        lock.lock_owned().await
    }
}

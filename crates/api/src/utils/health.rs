//! Health report for the `health` command
//!
//! Aggregates per-component probes (database, cache store) into one score.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Share of healthy components required for the whole process to be healthy
const HEALTHY_THRESHOLD: f64 = 0.8;

/// Overall health of the running context
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub is_healthy: bool,

    /// healthy_components / total_components, 1.0 when nothing was probed
    pub score: f64,

    pub components: Vec<ComponentHealth>,

    /// Unix timestamp of the probe
    pub timestamp: i64,
}

impl HealthStatus {
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or_default();

        Self { is_healthy: true, score: 1.0, components: Vec::new(), timestamp }
    }

    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    /// Recompute `score` and `is_healthy` from the collected components.
    pub fn calculate_score(&mut self) {
        if self.components.is_empty() {
            return;
        }

        let healthy_count = self.components.iter().filter(|c| c.is_healthy).count();

        self.score = healthy_count as f64 / self.components.len() as f64;
        self.is_healthy = self.score >= HEALTHY_THRESHOLD;
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Probe result for one component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

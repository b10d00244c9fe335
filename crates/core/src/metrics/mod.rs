//! Metric engine and concrete metrics

pub mod complete_tasks;
pub mod engine;

pub use complete_tasks::{CompleteTasksParams, CountOfCompleteTasks};
pub use engine::{Metric, MetricEngine};

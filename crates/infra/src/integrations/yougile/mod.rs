//! YouGile integration

pub mod client;
pub mod types;

pub use client::YouGileClient;
pub use types::{parse_employees, parse_tasks};

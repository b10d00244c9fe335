//! # WorkPulse Domain
//!
//! Business domain types and models for WorkPulse.
//!
//! This crate contains:
//! - Projects, employees and provider-side records (tasks, remote employees)
//! - Pagination and query filter types shared by every provider
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other WorkPulse crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

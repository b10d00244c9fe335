//! # WorkPulse Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite persistence for projects and employees
//! - Response cache stores (in-process and Redis)
//! - The HTTP client and provider integrations (YouGile)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `workpulse-core`
//! - Contains all "impure" code (I/O, network, storage)

pub mod cache;
pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use cache::{MemoryCacheStore, RedisCacheStore};
pub use database::*;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::*;

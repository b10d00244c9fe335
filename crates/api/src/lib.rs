//! # WorkPulse App
//!
//! Application layer - commands, context and the CLI entry point.
//!
//! This crate contains:
//! - Commands (owner-checked entry points over the core services)
//! - Application context (dependency injection)
//! - Logging setup and health reporting
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;

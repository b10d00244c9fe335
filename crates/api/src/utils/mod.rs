//! Command plumbing: logging setup, execution helpers and health reports

pub mod command_helpers;
pub mod health;
pub mod logging;

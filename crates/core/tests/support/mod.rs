//! Shared test helpers for `workpulse-core` integration tests.
//!
//! In-memory fakes for every core port so service tests can focus on
//! behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod cache;
pub mod providers;
pub mod repositories;

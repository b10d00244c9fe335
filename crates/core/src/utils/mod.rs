//! Shared helpers for core services

pub mod pagination;

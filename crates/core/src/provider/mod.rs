//! Upstream provider access

pub mod ports;

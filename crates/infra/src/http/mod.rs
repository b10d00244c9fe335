//! HTTP client used by provider integrations

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};

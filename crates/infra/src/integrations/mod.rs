//! External service integrations

pub mod factory;
pub mod yougile;

pub use factory::HttpProviderClientFactory;

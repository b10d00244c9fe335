//! Projects, their provider strategy and employee reconciliation

pub mod locks;
pub mod ports;
pub mod service;

pub use locks::ReconciliationLocks;
pub use service::ProjectTypeService;

//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Pagination
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const EMPLOYEE_SYNC_PAGE_SIZE: u32 = 50;

// Provider access
pub const YOUGILE_API_BASE_URL: &str = "https://ru.yougile.com/api-v2";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

// Response cache
pub const CACHE_KEY_PREFIX: &str = "function-cache-prefix";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 10;
pub const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;

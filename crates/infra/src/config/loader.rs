//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If any `WORKPULSE_*` configuration variable is set, loads from the
//!    environment
//! 2. Otherwise probes multiple paths for a config file (JSON or TOML)
//! 3. [`load_or_default`] uses built-in defaults only when neither source
//!    exists; a source that exists but is invalid is always an error
//!
//! ## Environment Variables
//! - `WORKPULSE_DB_PATH`: Database file path (required)
//! - `WORKPULSE_DB_POOL_SIZE`: Connection pool size (required)
//! - `WORKPULSE_CACHE_BACKEND`: `memory` or `redis` (default `memory`)
//! - `WORKPULSE_REDIS_URL`: Redis connection URL, required for `redis`
//! - `WORKPULSE_CACHE_TTL_SECONDS`: Provider response TTL (default 10)
//! - `WORKPULSE_CACHE_MAX_CAPACITY`: In-memory cache capacity
//! - `WORKPULSE_YOUGILE_BASE_URL`: YouGile API base URL
//! - `WORKPULSE_PROVIDER_TIMEOUT_SECONDS`: Provider request timeout (default 30)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./workpulse.json` or `./workpulse.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use workpulse_domain::{
    CacheBackend, CacheConfig, Config, DatabaseConfig, ProviderConfig, Result, WorkPulseError,
};

const ENV_VARS: &[&str] = &[
    "WORKPULSE_DB_PATH",
    "WORKPULSE_DB_POOL_SIZE",
    "WORKPULSE_CACHE_BACKEND",
    "WORKPULSE_REDIS_URL",
    "WORKPULSE_CACHE_TTL_SECONDS",
    "WORKPULSE_CACHE_MAX_CAPACITY",
    "WORKPULSE_YOUGILE_BASE_URL",
    "WORKPULSE_PROVIDER_TIMEOUT_SECONDS",
];

/// Load configuration from the environment or a probed config file
///
/// # Errors
/// Returns `WorkPulseError::Config` if:
/// - Neither source exists
/// - The chosen source has a missing, malformed or invalid value
/// - The loaded configuration is inconsistent (see [`validate`])
pub fn load() -> Result<Config> {
    resolve(probe_config_paths())?.ok_or_else(|| {
        WorkPulseError::Config(
            "No configuration found in the environment or any standard location".to_string(),
        )
    })
}

/// Load configuration, using [`Config::default`] when no source exists.
///
/// # Errors
/// Same as [`load`], except that a missing configuration is not an error.
pub fn load_or_default() -> Result<Config> {
    match resolve(probe_config_paths())? {
        Some(config) => Ok(config),
        None => {
            tracing::warn!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Pick the configuration source: environment first, then `probed`.
fn resolve(probed: Option<PathBuf>) -> Result<Option<Config>> {
    if ENV_VARS.iter().any(|key| env_opt(key).is_some()) {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(Some(config));
    }

    match probed {
        Some(path) => load_from_file(Some(path)).map(Some),
        None => Ok(None),
    }
}

/// Load configuration from environment variables
///
/// The database variables are required; everything else falls back to the
/// defaults in [`CacheConfig`] and [`ProviderConfig`].
///
/// # Errors
/// Returns `WorkPulseError::Config` if required variables are missing
/// or any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("WORKPULSE_DB_PATH")?;
    let db_pool_size = env_parse::<u32>("WORKPULSE_DB_POOL_SIZE", "pool size")?;

    let mut cache = CacheConfig::default();
    if let Some(backend) = env_opt("WORKPULSE_CACHE_BACKEND") {
        cache.backend = parse_backend(&backend)?;
    }
    cache.redis_url = env_opt("WORKPULSE_REDIS_URL");
    if env_opt("WORKPULSE_CACHE_TTL_SECONDS").is_some() {
        cache.ttl_seconds = env_parse("WORKPULSE_CACHE_TTL_SECONDS", "cache TTL")?;
    }
    if env_opt("WORKPULSE_CACHE_MAX_CAPACITY").is_some() {
        cache.max_capacity = env_parse("WORKPULSE_CACHE_MAX_CAPACITY", "cache capacity")?;
    }

    let mut provider = ProviderConfig::default();
    if let Some(base_url) = env_opt("WORKPULSE_YOUGILE_BASE_URL") {
        provider.yougile_base_url = base_url;
    }
    if env_opt("WORKPULSE_PROVIDER_TIMEOUT_SECONDS").is_some() {
        provider.timeout_seconds =
            env_parse("WORKPULSE_PROVIDER_TIMEOUT_SECONDS", "provider timeout")?;
    }

    let config = Config {
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
        cache,
        provider,
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `WorkPulseError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WorkPulseError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WorkPulseError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| WorkPulseError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Reject configurations that would only fail later at startup.
///
/// # Errors
/// Returns `WorkPulseError::Config` when the Redis backend is selected
/// without a URL, the pool size is zero, or the provider timeout is zero.
pub fn validate(config: &Config) -> Result<()> {
    if config.database.pool_size == 0 {
        return Err(WorkPulseError::Config("database pool size must be positive".into()));
    }
    if config.cache.backend == CacheBackend::Redis && config.cache.redis_url.is_none() {
        return Err(WorkPulseError::Config(
            "redis cache backend selected but no redis_url configured".into(),
        ));
    }
    if config.provider.timeout_seconds == 0 {
        return Err(WorkPulseError::Config("provider timeout must be positive".into()));
    }
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WorkPulseError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WorkPulseError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(WorkPulseError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parent, and the directory
/// of the running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.push(cwd.join("../config.json"));
        candidates.push(cwd.join("../config.toml"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("workpulse.json"),
        dir.join("workpulse.toml"),
    ]
}

fn parse_backend(value: &str) -> Result<CacheBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "memory" => Ok(CacheBackend::Memory),
        "redis" => Ok(CacheBackend::Redis),
        other => Err(WorkPulseError::Config(format!("Invalid cache backend: {}", other))),
    }
}

/// Get required environment variable
///
/// # Errors
/// Returns `WorkPulseError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WorkPulseError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_parse<T>(key: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var(key)?
        .trim()
        .parse::<T>()
        .map_err(|e| WorkPulseError::Config(format!("Invalid {}: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn write_temp(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_load_from_env_required_only_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("WORKPULSE_DB_PATH", "/tmp/test.db");
        std::env::set_var("WORKPULSE_DB_POOL_SIZE", "5");

        let config = load_from_env().expect("config from env");

        assert_eq!(config.database.path, "/tmp/test.db");
        assert_eq!(config.database.pool_size, 5);
        assert_eq!(config.cache, CacheConfig::default());
        assert_eq!(config.provider.yougile_base_url, "https://ru.yougile.com/api-v2");
        assert_eq!(config.provider.timeout_seconds, 30);

        clear_env();
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("WORKPULSE_DB_PATH", "/tmp/test.db");
        std::env::set_var("WORKPULSE_DB_POOL_SIZE", "2");
        std::env::set_var("WORKPULSE_CACHE_BACKEND", "Redis");
        std::env::set_var("WORKPULSE_REDIS_URL", "redis://localhost:6379/0");
        std::env::set_var("WORKPULSE_CACHE_TTL_SECONDS", "60");
        std::env::set_var("WORKPULSE_CACHE_MAX_CAPACITY", "100");
        std::env::set_var("WORKPULSE_YOUGILE_BASE_URL", "http://localhost:9000/api-v2");
        std::env::set_var("WORKPULSE_PROVIDER_TIMEOUT_SECONDS", "5");

        let config = load_from_env().expect("config from env");

        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.cache.redis_url.as_deref(), Some("redis://localhost:6379/0"));
        assert_eq!(config.cache.ttl_seconds, 60);
        assert_eq!(config.cache.max_capacity, 100);
        assert_eq!(config.provider.yougile_base_url, "http://localhost:9000/api-v2");
        assert_eq!(config.provider.timeout_seconds, 5);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, WorkPulseError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("WORKPULSE_DB_PATH", "/tmp/test.db");
        std::env::set_var("WORKPULSE_DB_POOL_SIZE", "not-a-number");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, WorkPulseError::Config(ref msg) if msg.contains("pool size")));

        clear_env();
    }

    #[test]
    fn test_redis_backend_requires_url() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("WORKPULSE_DB_PATH", "/tmp/test.db");
        std::env::set_var("WORKPULSE_DB_POOL_SIZE", "4");
        std::env::set_var("WORKPULSE_CACHE_BACKEND", "redis");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, WorkPulseError::Config(ref msg) if msg.contains("redis_url")));

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let path = write_temp(
            r#"{
                "database": { "path": "test.db", "pool_size": 4 },
                "cache": { "backend": "memory", "ttl_seconds": 15 }
            }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).expect("json config");
        assert_eq!(config.database.path, "test.db");
        assert_eq!(config.cache.ttl_seconds, 15);
        assert_eq!(config.provider, ProviderConfig::default());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = write_temp(
            r#"
[database]
path = "test.db"
pool_size = 6

[cache]
backend = "redis"
redis_url = "redis://redis:6379/0"

[provider]
timeout_seconds = 12
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).expect("toml config");
        assert_eq!(config.database.pool_size, 6);
        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.provider.timeout_seconds, 12);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(matches!(result, Err(WorkPulseError::Config(_))));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let path = write_temp(r#"{ "this is": "not valid json" "#, "json");

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_resolve_without_any_source_yields_nothing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        assert_eq!(resolve(None).expect("no error"), None);
    }

    #[test]
    fn test_resolve_propagates_invalid_probed_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let path = write_temp("[database]\npath = ", "toml");

        let result = resolve(Some(path.clone()));

        assert!(matches!(result, Err(WorkPulseError::Config(ref msg)) if msg.contains("TOML")));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_resolve_propagates_invalid_env_instead_of_reading_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        std::env::set_var("WORKPULSE_DB_PATH", "/tmp/test.db");
        std::env::set_var("WORKPULSE_DB_POOL_SIZE", "abc");
        let path = write_temp(r#"{ "database": { "path": "file.db", "pool_size": 2 } }"#, "json");

        let result = resolve(Some(path.clone()));

        assert!(matches!(result, Err(WorkPulseError::Config(ref msg)) if msg.contains("pool size")));
        std::fs::remove_file(path).ok();
        clear_env();
    }

    #[test]
    fn test_resolve_reads_probed_file_when_env_is_empty() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        let path = write_temp(r#"{ "database": { "path": "file.db", "pool_size": 2 } }"#, "json");

        let config = resolve(Some(path.clone())).expect("config").expect("some config");

        assert_eq!(config.database.path, "file.db");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", &PathBuf::from("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}

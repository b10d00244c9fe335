//! Tracing setup and structured command-outcome logging

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Output format of the process-wide subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Install the global tracing subscriber.
///
/// The filter comes from `WORKPULSE_LOG`, then `RUST_LOG`, then `info`.
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter = std::env::var("WORKPULSE_LOG")
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a logical identifier such as `"projects::create_project"`
/// and must not carry credentials.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => {
            warn!(command, duration_ms, error_type, "command_execution_failure");
        }
    }
}

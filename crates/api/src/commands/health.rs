//! Health check command

use crate::context::AppContext;
use crate::utils::health::HealthStatus;

/// Get application health status
///
/// # Example Response
/// ```json
/// {
///   "is_healthy": true,
///   "score": 1.0,
///   "components": [
///     { "name": "database", "is_healthy": true },
///     { "name": "cache", "is_healthy": true }
///   ],
///   "timestamp": 1698765432
/// }
/// ```
pub async fn get_app_health(ctx: &AppContext) -> HealthStatus {
    ctx.health_check().await
}

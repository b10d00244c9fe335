//! Conversions from external infrastructure errors into domain errors.

use r2d2::Error as PoolError;
use redis::RedisError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use workpulse_domain::WorkPulseError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WorkPulseError);

impl From<InfraError> for WorkPulseError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WorkPulseError> for InfraError {
    fn from(value: WorkPulseError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoWorkPulseError {
    fn into_workpulse(self) -> WorkPulseError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → WorkPulseError */
/* -------------------------------------------------------------------------- */

impl IntoWorkPulseError for SqlError {
    fn into_workpulse(self) -> WorkPulseError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        WorkPulseError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        WorkPulseError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        WorkPulseError::Database(format!("unique constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, 787) => WorkPulseError::Database(format!(
                        "foreign key constraint violation: {message}"
                    )),
                    _ => WorkPulseError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => WorkPulseError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                WorkPulseError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                WorkPulseError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => WorkPulseError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => WorkPulseError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_workpulse())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → WorkPulseError */
/* -------------------------------------------------------------------------- */

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(WorkPulseError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → WorkPulseError */
/* -------------------------------------------------------------------------- */

impl IntoWorkPulseError for HttpError {
    fn into_workpulse(self) -> WorkPulseError {
        if self.is_timeout() {
            return WorkPulseError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return WorkPulseError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return WorkPulseError::Schema(format!("failed to decode response body: {self}"));
        }

        if let Some(status) = self.status() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            return WorkPulseError::provider(status.as_u16(), reason);
        }

        WorkPulseError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_workpulse())
    }
}

/* -------------------------------------------------------------------------- */
/* redis::RedisError → WorkPulseError */
/* -------------------------------------------------------------------------- */

impl From<RedisError> for InfraError {
    fn from(value: RedisError) -> Self {
        InfraError(WorkPulseError::Cache(format!("redis error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → WorkPulseError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(WorkPulseError::Schema(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use rusqlite::ffi::{Error as FfiError, ErrorCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        let mapped: WorkPulseError = InfraError::from(err).into();
        match mapped {
            WorkPulseError::Database(msg) => {
                assert!(msg.contains("busy") || msg.contains("locked"));
            }
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[test]
    fn sqlite_unique_violation_keeps_constraint_message() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::ConstraintViolation, extended_code: 2067 },
            Some("UNIQUE constraint failed: employees.remote_ref_id".into()),
        );

        let mapped: WorkPulseError = InfraError::from(err).into();
        match mapped {
            WorkPulseError::Database(msg) => {
                assert!(msg.contains("unique constraint violation"));
                assert!(msg.contains("employees.remote_ref_id"));
            }
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_maps_to_schema_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let mapped: WorkPulseError = InfraError::from(err).into();
        assert!(matches!(mapped, WorkPulseError::Schema(_)));
    }

    #[tokio::test]
    async fn http_status_error_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: WorkPulseError = InfraError::from(error).into();
        match mapped {
            WorkPulseError::Provider { status, .. } => assert_eq!(status, 401),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: WorkPulseError = InfraError::from(error).into();
        assert!(matches!(mapped, WorkPulseError::Network(_)));
    }
}

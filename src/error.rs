//! Unified error types for the nodetron service.
//! Used by: inventory, health, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// MySQL-compatible code reported when a query names a table that does not exist.
pub const ER_NO_SUCH_TABLE: &str = "ER_NO_SUCH_TABLE";
const ER_DATABASE: &str = "ER_DATABASE";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error ({}): {0}", sql_error_code(.0))]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("lock poisoned: {0}")]
    Lock(String),

    #[error("health aggregation failed: {0}")]
    Health(String),
}

/// Maps a SQLite failure onto the error code clients match against.
pub fn sql_error_code(err: &rusqlite::Error) -> &'static str {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.starts_with("no such table") => {
            ER_NO_SUCH_TABLE
        }
        _ => ER_DATABASE,
    }
}

pub fn lock_err<E: std::fmt::Display>(what: &'static str) -> impl FnOnce(E) -> Error {
    move |e| Error::Lock(format!("{}: {}", what, e))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Serialization(_) | Error::Lock(_) | Error::Health(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_table_error() -> rusqlite::Error {
        let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
        conn.prepare("SELECT * FROM nowhere").expect_err("table must not exist")
    }

    #[test]
    fn not_found_returns_404() {
        let response = Error::NotFound("inventory item 9".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_returns_500() {
        let response = Error::Database(missing_table_error()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn lock_and_health_errors_return_500() {
        let response = Error::Lock("inventory".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = Error::Health("aggregator offline".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_table_is_reported_as_er_no_such_table() {
        let err = missing_table_error();
        assert_eq!(sql_error_code(&err), ER_NO_SUCH_TABLE);
        let msg = Error::Database(err).to_string();
        assert!(msg.contains(ER_NO_SUCH_TABLE), "{msg}");
        assert!(msg.contains("nowhere"), "{msg}");
    }

    #[test]
    fn other_sqlite_failures_use_generic_code() {
        assert_eq!(sql_error_code(&rusqlite::Error::QueryReturnedNoRows), ER_DATABASE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(Error::NotFound("x".into()).to_string(), "not found: x");
        assert_eq!(
            lock_err::<&str>("inventory")("poisoned").to_string(),
            "lock poisoned: inventory: poisoned"
        );
    }
}

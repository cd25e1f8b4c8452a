use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use timesheet_core::error::CoreError;
use timesheet_core::timesheet::TimesheetViolation;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `timesheet_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<TimesheetViolation> for AppError {
    fn from(violation: TimesheetViolation) -> Self {
        AppError::Core(violation.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Missing(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Store failures are logged and their driver message is handed back to the
/// caller unchanged:
///
/// - `RowNotFound` maps to 404.
/// - Unique (`23505`) and foreign key (`23503`) violations map to 409.
/// - Check constraint violations (`23514`) map to 400.
/// - Everything else maps to 500 `STORE_ERROR`.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            tracing::error!(
                error = %db_err,
                code = db_err.code().as_deref().unwrap_or("unknown"),
                constraint = db_err.constraint().unwrap_or("none"),
                "Database error",
            );
            let message = db_err.message().to_string();
            match db_err.code().as_deref() {
                Some("23505") | Some("23503") => (StatusCode::CONFLICT, "CONFLICT", message),
                Some("23514") => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", message),
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                other.to_string(),
            )
        }
    }
}

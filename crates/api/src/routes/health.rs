//! `GET /health`: liveness plus the checks an operator needs before trusting
//! timesheet writes (database reachable, schema current, error log present).

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every check below passes, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Newest migration applied to the database.
    pub schema_version: Option<i64>,
    /// Newest migration embedded in this build.
    pub expected_schema_version: Option<i64>,
    /// Whether the configured error log directory exists.
    pub error_log_dir_present: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = timesheet_db::health_check(&state.pool).await.is_ok();
    let schema_version = if db_healthy {
        timesheet_db::applied_schema_version(&state.pool)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Could not read schema version");
                None
            })
    } else {
        None
    };
    let expected_schema_version = timesheet_db::expected_schema_version();
    let error_log_dir_present = state.config.log.dir.is_dir();

    let healthy =
        db_healthy && schema_version == expected_schema_version && error_log_dir_present;

    Json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_version,
        expected_schema_version,
        error_log_dir_present,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

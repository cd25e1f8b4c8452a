use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cloned per request; the pool and config are both
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: timesheet_db::DbPool,
    /// Server configuration; `/health` checks the error log directory from it.
    pub config: Arc<ServerConfig>,
}

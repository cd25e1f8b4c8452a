//! Shared query parameter types for API handlers.

use serde::Deserialize;
use timesheet_core::types::WorkDate;

/// Inclusive date range filter (`?from=YYYY-MM-DD&to=YYYY-MM-DD`).
///
/// Either bound may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<WorkDate>,
    pub to: Option<WorkDate>,
}

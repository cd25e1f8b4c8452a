//! Handlers for `/employees/{emp_id}/timesheet`.
//!
//! Batch validation and writes live in [`crate::workflows::timesheet`]; these
//! handlers only resolve the employee and shape the response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use timesheet_core::error::CoreError;
use timesheet_core::timesheet::TimesheetViolation;
use timesheet_core::types::DbId;
use timesheet_db::models::timesheet::{TimesheetBatch, TimesheetDates, TimesheetUpdateBatch};
use timesheet_db::repositories::{EmployeeRepo, TimesheetRepo};

use crate::error::{AppError, AppResult};
use crate::query::DateRangeParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::workflows::timesheet as workflow;

async fn ensure_employee(state: &AppState, emp_id: DbId) -> AppResult<()> {
    EmployeeRepo::find_by_id(&state.pool, emp_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: emp_id,
        }))?;
    Ok(())
}

/// POST /api/v1/employees/{emp_id}/timesheet
pub async fn add(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
    Json(batch): Json<TimesheetBatch>,
) -> AppResult<impl IntoResponse> {
    ensure_employee(&state, emp_id).await?;
    let entries = workflow::add_timesheet_batch(&state.pool, emp_id, &batch).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entries })))
}

/// PUT /api/v1/employees/{emp_id}/timesheet
pub async fn update(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
    Json(batch): Json<TimesheetUpdateBatch>,
) -> AppResult<impl IntoResponse> {
    ensure_employee(&state, emp_id).await?;
    let entries = workflow::update_timesheet_batch(&state.pool, emp_id, &batch).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/employees/{emp_id}/timesheet?from=&to=
///
/// An employee with no entries in range yields 404 "No such entries".
pub async fn list(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
    Query(range): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(AppError::BadRequest(format!(
                "Invalid range: {from} is after {to}"
            )));
        }
    }
    ensure_employee(&state, emp_id).await?;
    let entries =
        TimesheetRepo::list_by_employee(&state.pool, emp_id, range.from, range.to).await?;
    if entries.is_empty() {
        return Err(TimesheetViolation::NoSuchEntries.into());
    }
    Ok(Json(DataResponse { data: entries }))
}

/// DELETE /api/v1/employees/{emp_id}/timesheet
pub async fn delete(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
    Json(body): Json<TimesheetDates>,
) -> AppResult<StatusCode> {
    ensure_employee(&state, emp_id).await?;
    workflow::delete_timesheet_entries(&state.pool, emp_id, &body.dates).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/employees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use timesheet_core::error::CoreError;
use timesheet_core::types::DbId;
use timesheet_db::models::employee::{CreateEmployee, UpdateEmployee};
use timesheet_db::repositories::{EmployeeRepo, ProjectRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Employee",
        id,
    })
}

/// POST /api/v1/employees
///
/// The email address is derived from the names and never taken from input.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let employee = EmployeeRepo::create(&state.pool, &input).await?;
    tracing::debug!(emp_id = employee.emp_id, "Employee added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}

/// GET /api/v1/employees
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: employees }))
}

/// GET /api/v1/employees/{emp_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, emp_id)
        .await?
        .ok_or_else(|| not_found(emp_id))?;
    Ok(Json(DataResponse { data: employee }))
}

/// PUT /api/v1/employees/{emp_id}
pub async fn update(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let employee = EmployeeRepo::update(&state.pool, emp_id, &input)
        .await?
        .ok_or_else(|| not_found(emp_id))?;
    tracing::debug!(emp_id, "Employee updated");
    Ok(Json(DataResponse { data: employee }))
}

/// DELETE /api/v1/employees/{emp_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EmployeeRepo::delete(&state.pool, emp_id).await? {
        tracing::debug!(emp_id, "Employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(emp_id))
    }
}

/// GET /api/v1/employees/{emp_id}/projects
///
/// Projects the employee manages.
pub async fn list_managed_projects(
    State(state): State<AppState>,
    Path(emp_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    EmployeeRepo::find_by_id(&state.pool, emp_id)
        .await?
        .ok_or_else(|| not_found(emp_id))?;
    let projects = ProjectRepo::list_by_manager(&state.pool, emp_id).await?;
    Ok(Json(DataResponse { data: projects }))
}

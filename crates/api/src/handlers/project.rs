//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use timesheet_core::error::CoreError;
use timesheet_core::project::validate_project_dates;
use timesheet_core::types::DbId;
use timesheet_db::models::project::{CreateProject, UpdateProject};
use timesheet_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_project_dates(input.prj_start_date, input.prj_end_date)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::debug!(prj_id = project.prj_id, "Project added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{prj_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(prj_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, prj_id)
        .await?
        .ok_or_else(|| not_found(prj_id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{prj_id}
///
/// Dates are checked against the stored values they are merged with, so
/// moving only the end date still cannot place it before the start.
pub async fn update(
    State(state): State<AppState>,
    Path(prj_id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let current = ProjectRepo::find_by_id(&state.pool, prj_id)
        .await?
        .ok_or_else(|| not_found(prj_id))?;
    validate_project_dates(
        input.prj_start_date.unwrap_or(current.prj_start_date),
        input.prj_end_date.unwrap_or(current.prj_end_date),
    )?;

    let project = ProjectRepo::update(&state.pool, prj_id, &input)
        .await?
        .ok_or_else(|| not_found(prj_id))?;
    tracing::debug!(prj_id, "Project updated");
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{prj_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(prj_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, prj_id).await? {
        tracing::debug!(prj_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(prj_id))
    }
}

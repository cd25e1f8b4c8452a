//! Handlers for the `/project-cost-rates` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use timesheet_core::error::CoreError;
use timesheet_core::types::DbId;
use timesheet_db::models::project_cost_rate::{CreateProjectCostRate, UpdateProjectCostRate};
use timesheet_db::repositories::ProjectCostRateRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project cost rate",
        id,
    })
}

/// POST /api/v1/project-cost-rates
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectCostRate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let rates = ProjectCostRateRepo::create(&state.pool, &input).await?;
    tracing::debug!(prj_id = rates.prj_id, "Project cost rates added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: rates })))
}

/// GET /api/v1/project-cost-rates/{prj_id}
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(prj_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rates = ProjectCostRateRepo::find_by_project(&state.pool, prj_id)
        .await?
        .ok_or_else(|| not_found(prj_id))?;
    Ok(Json(DataResponse { data: rates }))
}

/// PUT /api/v1/project-cost-rates/{prj_id}
pub async fn update(
    State(state): State<AppState>,
    Path(prj_id): Path<DbId>,
    Json(input): Json<UpdateProjectCostRate>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let rates = ProjectCostRateRepo::update(&state.pool, prj_id, &input)
        .await?
        .ok_or_else(|| not_found(prj_id))?;
    tracing::debug!(prj_id, "Project cost rates updated");
    Ok(Json(DataResponse { data: rates }))
}

/// DELETE /api/v1/project-cost-rates/{prj_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(prj_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectCostRateRepo::delete(&state.pool, prj_id).await? {
        tracing::debug!(prj_id, "Project cost rates deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(prj_id))
    }
}

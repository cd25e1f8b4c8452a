//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timesheet_core::types::{DbId, Timestamp, WorkDate};
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub prj_id: DbId,
    pub prj_name: String,
    pub prj_manager_id: DbId,
    pub prj_location: String,
    pub prj_start_date: WorkDate,
    pub prj_end_date: WorkDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    pub prj_id: DbId,
    #[validate(length(min = 1))]
    pub prj_name: String,
    pub prj_manager_id: DbId,
    #[validate(length(min = 1))]
    pub prj_location: String,
    pub prj_start_date: WorkDate,
    pub prj_end_date: WorkDate,
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1))]
    pub prj_name: Option<String>,
    pub prj_manager_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub prj_location: Option<String>,
    pub prj_start_date: Option<WorkDate>,
    pub prj_end_date: Option<WorkDate>,
}

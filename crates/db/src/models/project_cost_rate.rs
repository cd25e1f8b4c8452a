//! Per-project hourly billing rates.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timesheet_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `project_cost_rates` table. `prj_id` doubles as the key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectCostRate {
    pub prj_id: DbId,
    pub associate: i32,
    pub senior_associate: i32,
    pub analyst: i32,
    pub senior_analyst: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering the rates of a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectCostRate {
    pub prj_id: DbId,
    #[validate(range(min = 0))]
    pub associate: i32,
    #[validate(range(min = 0))]
    pub senior_associate: i32,
    #[validate(range(min = 0))]
    pub analyst: i32,
    #[validate(range(min = 0))]
    pub senior_analyst: i32,
}

/// DTO for changing some or all of a project's rates.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectCostRate {
    #[validate(range(min = 0))]
    pub associate: Option<i32>,
    #[validate(range(min = 0))]
    pub senior_associate: Option<i32>,
    #[validate(range(min = 0))]
    pub analyst: Option<i32>,
    #[validate(range(min = 0))]
    pub senior_analyst: Option<i32>,
}

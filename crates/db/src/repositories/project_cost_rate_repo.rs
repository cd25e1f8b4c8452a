//! Repository for the `project_cost_rates` table.

use sqlx::PgPool;
use timesheet_core::types::DbId;

use crate::models::project_cost_rate::{
    CreateProjectCostRate, ProjectCostRate, UpdateProjectCostRate,
};

const COLUMNS: &str =
    "prj_id, associate, senior_associate, analyst, senior_analyst, created_at, updated_at";

/// Provides CRUD operations for project billing rates.
pub struct ProjectCostRateRepo;

impl ProjectCostRateRepo {
    /// Insert the rates for a project. A second insert for the same project
    /// fails with a primary key violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectCostRate,
    ) -> Result<ProjectCostRate, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_cost_rates
                (prj_id, associate, senior_associate, analyst, senior_analyst)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCostRate>(&query)
            .bind(input.prj_id)
            .bind(input.associate)
            .bind(input.senior_associate)
            .bind(input.analyst)
            .bind(input.senior_analyst)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_project(
        pool: &PgPool,
        prj_id: DbId,
    ) -> Result<Option<ProjectCostRate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_cost_rates WHERE prj_id = $1");
        sqlx::query_as::<_, ProjectCostRate>(&query)
            .bind(prj_id)
            .fetch_optional(pool)
            .await
    }

    /// Update some or all rates. Returns `None` if the project has no rates.
    pub async fn update(
        pool: &PgPool,
        prj_id: DbId,
        input: &UpdateProjectCostRate,
    ) -> Result<Option<ProjectCostRate>, sqlx::Error> {
        let query = format!(
            "UPDATE project_cost_rates SET
                associate = COALESCE($2, associate),
                senior_associate = COALESCE($3, senior_associate),
                analyst = COALESCE($4, analyst),
                senior_analyst = COALESCE($5, senior_analyst),
                updated_at = NOW()
             WHERE prj_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectCostRate>(&query)
            .bind(prj_id)
            .bind(input.associate)
            .bind(input.senior_associate)
            .bind(input.analyst)
            .bind(input.senior_analyst)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project's rates. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, prj_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_cost_rates WHERE prj_id = $1")
            .bind(prj_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

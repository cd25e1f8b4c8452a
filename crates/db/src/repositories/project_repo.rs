//! Repository for the `projects` table.

use sqlx::PgPool;
use timesheet_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "prj_id, prj_name, prj_manager_id, prj_location, prj_start_date, \
                       prj_end_date, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (prj_id, prj_name, prj_manager_id, prj_location, prj_start_date, prj_end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.prj_id)
            .bind(&input.prj_name)
            .bind(input.prj_manager_id)
            .bind(&input.prj_location)
            .bind(input.prj_start_date)
            .bind(input.prj_end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, prj_id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE prj_id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(prj_id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY prj_id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List the projects an employee manages.
    pub async fn list_by_manager(
        pool: &PgPool,
        manager_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE prj_manager_id = $1 ORDER BY prj_start_date, prj_id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(manager_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `prj_id` exists.
    pub async fn update(
        pool: &PgPool,
        prj_id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                prj_name = COALESCE($2, prj_name),
                prj_manager_id = COALESCE($3, prj_manager_id),
                prj_location = COALESCE($4, prj_location),
                prj_start_date = COALESCE($5, prj_start_date),
                prj_end_date = COALESCE($6, prj_end_date),
                updated_at = NOW()
             WHERE prj_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(prj_id)
            .bind(&input.prj_name)
            .bind(input.prj_manager_id)
            .bind(&input.prj_location)
            .bind(input.prj_start_date)
            .bind(input.prj_end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, prj_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE prj_id = $1")
            .bind(prj_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

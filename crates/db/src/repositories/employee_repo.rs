//! Repository for the `employees` table.

use sqlx::PgPool;
use timesheet_core::employee::derive_email;
use timesheet_core::types::DbId;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "emp_id, first_name, second_name, email_address, designation, \
                       project_name, manager, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, deriving the email address from the names.
    ///
    /// A duplicate `emp_id` surfaces as a primary key violation.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees
                (emp_id, first_name, second_name, email_address, designation, project_name, manager)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(input.emp_id)
            .bind(&input.first_name)
            .bind(&input.second_name)
            .bind(derive_email(&input.first_name, &input.second_name))
            .bind(&input.designation)
            .bind(&input.project_name)
            .bind(&input.manager)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by id.
    pub async fn find_by_id(pool: &PgPool, emp_id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE emp_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(emp_id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY emp_id");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// If `input.email_address` is `None` the address is re-derived from the
    /// names the row ends up with. The row is locked between reading the
    /// current names and writing, so concurrent renames cannot store an
    /// address derived from stale names. Returns `None` if no row has `emp_id`.
    pub async fn update(
        pool: &PgPool,
        emp_id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock_query = format!("SELECT {COLUMNS} FROM employees WHERE emp_id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Employee>(&lock_query)
            .bind(emp_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let first_name = input.first_name.as_deref().unwrap_or(&current.first_name);
        let second_name = input.second_name.as_deref().unwrap_or(&current.second_name);
        let email_address = input
            .email_address
            .clone()
            .unwrap_or_else(|| derive_email(first_name, second_name));

        let query = format!(
            "UPDATE employees SET
                first_name = $2,
                second_name = $3,
                email_address = $4,
                designation = COALESCE($5, designation),
                project_name = COALESCE($6, project_name),
                manager = COALESCE($7, manager),
                updated_at = NOW()
             WHERE emp_id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Employee>(&query)
            .bind(emp_id)
            .bind(first_name)
            .bind(second_name)
            .bind(email_address)
            .bind(&input.designation)
            .bind(&input.project_name)
            .bind(&input.manager)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete an employee by id. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while projects or timesheet
    /// entries still reference the employee.
    pub async fn delete(pool: &PgPool, emp_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE emp_id = $1")
            .bind(emp_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `timesheet_entries` table.

use sqlx::{PgConnection, PgPool};
use timesheet_core::types::{DbId, WorkDate};

use crate::models::timesheet::{NewTimesheetEntry, TimesheetEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "s_no, emp_id, work_date, hours, shift, prj_id, created_at, updated_at";

/// Provides data access for timesheet entries.
///
/// There is at most one row per (employee, date), enforced by
/// `uq_timesheet_entries_emp_date`.
pub struct TimesheetRepo;

impl TimesheetRepo {
    /// Insert one entry for an employee.
    pub async fn insert(
        conn: &mut PgConnection,
        emp_id: DbId,
        entry: &NewTimesheetEntry,
    ) -> Result<TimesheetEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO timesheet_entries (emp_id, work_date, hours, shift, prj_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(emp_id)
            .bind(entry.work_date)
            .bind(entry.hours)
            .bind(entry.shift)
            .bind(entry.prj_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find the entry an employee booked on `work_date`.
    pub async fn find_by_date(
        conn: &mut PgConnection,
        emp_id: DbId,
        work_date: WorkDate,
    ) -> Result<Option<TimesheetEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timesheet_entries WHERE emp_id = $1 AND work_date = $2"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(emp_id)
            .bind(work_date)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Return which of `dates` already have an entry for the employee.
    pub async fn existing_dates(
        conn: &mut PgConnection,
        emp_id: DbId,
        dates: &[WorkDate],
    ) -> Result<Vec<WorkDate>, sqlx::Error> {
        sqlx::query_scalar::<_, WorkDate>(
            "SELECT work_date FROM timesheet_entries \
             WHERE emp_id = $1 AND work_date = ANY($2) \
             ORDER BY work_date",
        )
        .bind(emp_id)
        .bind(dates)
        .fetch_all(&mut *conn)
        .await
    }

    /// Add `hours` to an existing entry, returning the updated row.
    pub async fn add_hours(
        conn: &mut PgConnection,
        s_no: DbId,
        hours: i32,
    ) -> Result<TimesheetEntry, sqlx::Error> {
        let query = format!(
            "UPDATE timesheet_entries SET hours = hours + $2, updated_at = NOW()
             WHERE s_no = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(s_no)
            .bind(hours)
            .fetch_one(&mut *conn)
            .await
    }

    /// Delete the entry an employee booked on `work_date`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_by_date(
        conn: &mut PgConnection,
        emp_id: DbId,
        work_date: WorkDate,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM timesheet_entries WHERE emp_id = $1 AND work_date = $2")
                .bind(emp_id)
                .bind(work_date)
                .execute(&mut *conn)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List an employee's entries in date order, optionally bounded by an
    /// inclusive date range.
    pub async fn list_by_employee(
        pool: &PgPool,
        emp_id: DbId,
        from: Option<WorkDate>,
        to: Option<WorkDate>,
    ) -> Result<Vec<TimesheetEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timesheet_entries
             WHERE emp_id = $1
               AND ($2::DATE IS NULL OR work_date >= $2)
               AND ($3::DATE IS NULL OR work_date <= $3)
             ORDER BY work_date"
        );
        sqlx::query_as::<_, TimesheetEntry>(&query)
            .bind(emp_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}

//! Timesheet validation and write path.
//!
//! Every batch runs inside a single transaction: either all of its entries
//! are written or none are. The existence checks read through the same
//! transaction, and `uq_timesheet_entries_emp_date` turns a concurrent
//! duplicate insert into a conflict at commit time.

use sqlx::{PgConnection, PgPool};
use timesheet_core::timesheet::{
    check_daily_hour_cap, check_dates_unique, validate_entry_hours, validate_workdays,
    TimesheetViolation,
};
use timesheet_core::types::{DbId, WorkDate};
use timesheet_db::models::timesheet::{TimesheetBatch, TimesheetEntry, TimesheetUpdateBatch};
use timesheet_db::repositories::TimesheetRepo;

use crate::error::AppResult;

/// Create-side existence check.
///
/// Rejects weekend dates first, then fails with `DuplicateEntry` on the first
/// proposed date that already has a stored entry for the employee.
pub async fn require_absent(
    conn: &mut PgConnection,
    emp_id: DbId,
    dates: &[WorkDate],
) -> AppResult<()> {
    validate_workdays(dates.iter().copied())?;

    let stored = TimesheetRepo::existing_dates(conn, emp_id, dates).await?;
    if let Some(date) = dates.iter().find(|d| stored.contains(d)) {
        return Err(TimesheetViolation::DuplicateEntry(*date).into());
    }
    Ok(())
}

/// Update-side existence check: at least one of `dates` must already have a
/// stored entry for the employee.
pub async fn require_any_exists(
    conn: &mut PgConnection,
    emp_id: DbId,
    dates: &[WorkDate],
) -> AppResult<()> {
    let stored = TimesheetRepo::existing_dates(conn, emp_id, dates).await?;
    if stored.is_empty() {
        return Err(TimesheetViolation::NoSuchEntries.into());
    }
    Ok(())
}

/// Validate and insert a batch of new entries.
///
/// Order of checks: hours per entry, workdays and stored duplicates
/// ([`require_absent`]), the daily cap over the batch, then repeated dates
/// within the batch. Nothing is written unless every check passes.
pub async fn add_timesheet_batch(
    pool: &PgPool,
    emp_id: DbId,
    batch: &TimesheetBatch,
) -> AppResult<Vec<TimesheetEntry>> {
    let dates = batch.dates();
    let hours = batch.daily_hours();
    validate_entry_hours(&hours)?;

    let mut tx = pool.begin().await?;

    require_absent(&mut tx, emp_id, &dates).await?;
    check_daily_hour_cap(&hours)?;
    check_dates_unique(dates.iter().copied())?;

    let mut created = Vec::with_capacity(batch.weekly_details.len());
    for entry in &batch.weekly_details {
        created.push(TimesheetRepo::insert(&mut tx, emp_id, entry).await?);
    }
    tx.commit().await?;

    tracing::debug!(emp_id, count = created.len(), "Timesheet entries added");
    Ok(created)
}

/// Add hours to already stored entries.
///
/// Each increment is checked against the hours its day already holds, so
/// `stored + increment` may reach but never exceed the daily cap. Increments
/// for the same date are applied in order and each sees the previous one.
/// Any failure rolls back every increment in the batch.
pub async fn update_timesheet_batch(
    pool: &PgPool,
    emp_id: DbId,
    batch: &TimesheetUpdateBatch,
) -> AppResult<Vec<TimesheetEntry>> {
    let dates = batch.dates();
    validate_entry_hours(&batch.daily_hours())?;
    validate_workdays(dates.iter().copied())?;

    let mut tx = pool.begin().await?;

    require_any_exists(&mut tx, emp_id, &dates).await?;

    let mut updated = Vec::with_capacity(batch.weekly_details.len());
    for increment in &batch.weekly_details {
        let stored = TimesheetRepo::find_by_date(&mut tx, emp_id, increment.work_date)
            .await?
            .ok_or(TimesheetViolation::NoEntryForDate(increment.work_date))?;

        check_daily_hour_cap(&[increment.daily_hours(), stored.daily_hours()])?;

        updated.push(TimesheetRepo::add_hours(&mut tx, stored.s_no, increment.hours).await?);
    }
    tx.commit().await?;

    tracing::debug!(emp_id, count = updated.len(), "Timesheet entries updated");
    Ok(updated)
}

/// Delete an employee's entries for every date in `dates`.
///
/// If any date has no entry the whole batch is rolled back and nothing is
/// deleted.
pub async fn delete_timesheet_entries(
    pool: &PgPool,
    emp_id: DbId,
    dates: &[WorkDate],
) -> AppResult<()> {
    if dates.is_empty() {
        return Err(TimesheetViolation::EmptyBatch.into());
    }

    let mut tx = pool.begin().await?;
    for &date in dates {
        if !TimesheetRepo::delete_by_date(&mut tx, emp_id, date).await? {
            return Err(TimesheetViolation::NoEntryForDate(date).into());
        }
    }
    tx.commit().await?;

    tracing::debug!(emp_id, ?dates, "Timesheet entries deleted");
    Ok(())
}

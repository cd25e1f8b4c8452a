//! Timesheet entry rules.
//!
//! The checks here are pure: they only look at the proposed batch (and, on
//! update, the hours already stored for the same day). Existence checks that
//! need the store live next to the write path in the API crate and report
//! through the same [`TimesheetViolation`] type.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Weekday};

use crate::types::WorkDate;

/// Maximum number of hours an employee may book on a single day.
pub const MAX_DAILY_HOURS: i32 = 8;

/// A rule broken by a proposed timesheet batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimesheetViolation {
    #[error("{0} is not a workday. Please check your entry.")]
    NotAWorkday(WorkDate),

    #[error(
        "Work hours can't be more than 8 hours per day. \
         Recheck your entry for date {date} ({total} hours)"
    )]
    HourCapExceeded { date: WorkDate, total: i32 },

    #[error("Hours for {date} must be between 1 and 8, got {hours}")]
    HoursOutOfRange { date: WorkDate, hours: i32 },

    #[error("Timesheet batch is empty")]
    EmptyBatch,

    #[error("Entry already exists for {0}")]
    DuplicateEntry(WorkDate),

    #[error("{0} appears more than once in the batch")]
    RepeatedInBatch(WorkDate),

    #[error("No such entries")]
    NoSuchEntries,

    #[error("No such entry for {0}")]
    NoEntryForDate(WorkDate),
}

/// Hours booked against one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyHours {
    pub work_date: WorkDate,
    pub hours: i32,
}

impl DailyHours {
    pub fn new(work_date: WorkDate, hours: i32) -> Self {
        Self { work_date, hours }
    }
}

/// Returns `true` for Monday through Friday.
pub fn is_workday(date: WorkDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Fail on the first date that falls on a weekend.
pub fn validate_workdays<I>(dates: I) -> Result<(), TimesheetViolation>
where
    I: IntoIterator<Item = WorkDate>,
{
    match dates.into_iter().find(|d| !is_workday(*d)) {
        Some(date) => Err(TimesheetViolation::NotAWorkday(date)),
        None => Ok(()),
    }
}

/// Reject empty batches and entries whose hours fall outside
/// `1..=MAX_DAILY_HOURS`.
pub fn validate_entry_hours(entries: &[DailyHours]) -> Result<(), TimesheetViolation> {
    if entries.is_empty() {
        return Err(TimesheetViolation::EmptyBatch);
    }
    match entries
        .iter()
        .find(|e| !(1..=MAX_DAILY_HOURS).contains(&e.hours))
    {
        Some(e) => Err(TimesheetViolation::HoursOutOfRange {
            date: e.work_date,
            hours: e.hours,
        }),
        None => Ok(()),
    }
}

/// Sum hours per date and fail on the earliest date whose total exceeds
/// [`MAX_DAILY_HOURS`].
///
/// Callers decide what goes into `entries`: the proposed batch alone on
/// create, or the proposed entry together with its stored row on update.
pub fn check_daily_hour_cap(entries: &[DailyHours]) -> Result<(), TimesheetViolation> {
    let mut totals: BTreeMap<WorkDate, i32> = BTreeMap::new();
    for entry in entries {
        let total = totals.entry(entry.work_date).or_insert(0);
        *total = total.saturating_add(entry.hours);
    }

    match totals.into_iter().find(|(_, total)| *total > MAX_DAILY_HOURS) {
        Some((date, total)) => Err(TimesheetViolation::HourCapExceeded { date, total }),
        None => Ok(()),
    }
}

/// Fail if the same date is named twice in one create batch.
///
/// Only one row per (employee, date) may exist, so a batch that splits a
/// day across several entries cannot be stored as submitted.
pub fn check_dates_unique<I>(dates: I) -> Result<(), TimesheetViolation>
where
    I: IntoIterator<Item = WorkDate>,
{
    let mut seen = HashSet::new();
    for date in dates {
        if !seen.insert(date) {
            return Err(TimesheetViolation::RepeatedInBatch(date));
        }
    }
    Ok(())
}

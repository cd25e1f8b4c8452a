//! Timesheet entry model and batch DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timesheet_core::timesheet::DailyHours;
use timesheet_core::types::{DbId, Timestamp, WorkDate};

/// A row from the `timesheet_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimesheetEntry {
    pub s_no: DbId,
    pub emp_id: DbId,
    pub work_date: WorkDate,
    pub hours: i32,
    pub shift: i32,
    pub prj_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TimesheetEntry {
    /// The hours this row already books against its date.
    pub fn daily_hours(&self) -> DailyHours {
        DailyHours::new(self.work_date, self.hours)
    }
}

/// One proposed day of work inside a create batch.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTimesheetEntry {
    pub work_date: WorkDate,
    pub hours: i32,
    pub shift: i32,
    pub prj_id: DbId,
}

impl NewTimesheetEntry {
    pub fn daily_hours(&self) -> DailyHours {
        DailyHours::new(self.work_date, self.hours)
    }
}

/// Request body for adding a week of entries.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetBatch {
    pub weekly_details: Vec<NewTimesheetEntry>,
}

impl TimesheetBatch {
    pub fn dates(&self) -> Vec<WorkDate> {
        self.weekly_details.iter().map(|e| e.work_date).collect()
    }

    pub fn daily_hours(&self) -> Vec<DailyHours> {
        self.weekly_details
            .iter()
            .map(NewTimesheetEntry::daily_hours)
            .collect()
    }
}

/// Extra hours to add to an already stored day.
///
/// Any other fields sent alongside (`shift`, `prj_id`) are ignored; the
/// stored row keeps its own.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursIncrement {
    pub work_date: WorkDate,
    pub hours: i32,
}

impl HoursIncrement {
    pub fn daily_hours(&self) -> DailyHours {
        DailyHours::new(self.work_date, self.hours)
    }
}

/// Request body for adding hours to existing entries.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetUpdateBatch {
    pub weekly_details: Vec<HoursIncrement>,
}

impl TimesheetUpdateBatch {
    pub fn dates(&self) -> Vec<WorkDate> {
        self.weekly_details.iter().map(|e| e.work_date).collect()
    }

    pub fn daily_hours(&self) -> Vec<DailyHours> {
        self.weekly_details
            .iter()
            .map(HoursIncrement::daily_hours)
            .collect()
    }
}

/// Request body for deleting entries by date.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetDates {
    pub dates: Vec<WorkDate>,
}

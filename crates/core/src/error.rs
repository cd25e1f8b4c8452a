use crate::timesheet::TimesheetViolation;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup by something other than a primary key came back empty.
    #[error("Not found: {0}")]
    Missing(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<TimesheetViolation> for CoreError {
    fn from(violation: TimesheetViolation) -> Self {
        let message = violation.to_string();
        match violation {
            TimesheetViolation::NotAWorkday(_)
            | TimesheetViolation::HourCapExceeded { .. }
            | TimesheetViolation::HoursOutOfRange { .. }
            | TimesheetViolation::EmptyBatch => CoreError::Validation(message),
            TimesheetViolation::DuplicateEntry(_) | TimesheetViolation::RepeatedInBatch(_) => {
                CoreError::Conflict(message)
            }
            TimesheetViolation::NoSuchEntries | TimesheetViolation::NoEntryForDate(_) => {
                CoreError::Missing(message)
            }
        }
    }
}

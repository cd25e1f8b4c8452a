//! Project scheduling rules.

use crate::error::CoreError;
use crate::types::WorkDate;

/// Validate that a project does not end before it starts.
///
/// A project that starts and ends on the same day is allowed.
pub fn validate_project_dates(start: WorkDate, end: WorkDate) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(format!(
            "Project end date {end} is before its start date {start}"
        )));
    }
    Ok(())
}

/// All database primary keys are PostgreSQL BIGINT.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date of a timesheet entry or project milestone.
pub type WorkDate = chrono::NaiveDate;

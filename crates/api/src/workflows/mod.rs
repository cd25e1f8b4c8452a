//! Multi-step write paths that combine domain rules with repository calls
//! inside one transaction.

pub mod timesheet;

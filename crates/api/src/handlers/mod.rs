//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories in `timesheet_db` (or to
//! [`crate::workflows`] for timesheet batches) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod employee;
pub mod project;
pub mod project_cost_rate;
pub mod timesheet;

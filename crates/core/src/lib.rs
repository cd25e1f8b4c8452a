//! Domain types and business rules for the timesheet service.
//!
//! This crate has zero internal dependencies so both the repository layer and
//! the HTTP layer can share the same rules.

pub mod employee;
pub mod error;
pub mod project;
pub mod timesheet;
pub mod types;

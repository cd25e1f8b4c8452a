//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Single-statement operations take `&PgPool`; the timesheet methods used by
//! the batch workflows take `&mut PgConnection` so they can run inside the
//! caller's transaction.

pub mod employee_repo;
pub mod project_cost_rate_repo;
pub mod project_repo;
pub mod timesheet_repo;

pub use employee_repo::EmployeeRepo;
pub use project_cost_rate_repo::ProjectCostRateRepo;
pub use project_repo::ProjectRepo;
pub use timesheet_repo::TimesheetRepo;

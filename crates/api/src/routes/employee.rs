//! Route definitions for the `/employees` resource.
//!
//! Also nests the timesheet routes under `/employees/{emp_id}/timesheet`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{employee, timesheet};
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{emp_id}                  -> get_by_id
/// PUT    /{emp_id}                  -> update
/// DELETE /{emp_id}                  -> delete
/// GET    /{emp_id}/projects         -> list_managed_projects
///
/// POST   /{emp_id}/timesheet        -> timesheet::add
/// PUT    /{emp_id}/timesheet        -> timesheet::update
/// GET    /{emp_id}/timesheet        -> timesheet::list
/// DELETE /{emp_id}/timesheet        -> timesheet::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employee::list).post(employee::create))
        .route(
            "/{emp_id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route("/{emp_id}/projects", get(employee::list_managed_projects))
        .route(
            "/{emp_id}/timesheet",
            get(timesheet::list)
                .post(timesheet::add)
                .put(timesheet::update)
                .delete(timesheet::delete),
        )
}

pub mod employee;
pub mod health;
pub mod project;
pub mod project_cost_rate;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                                   list, create
/// /employees/{emp_id}                          get, update, delete
/// /employees/{emp_id}/projects                 projects managed (GET)
/// /employees/{emp_id}/timesheet                add, update, list, delete
///
/// /projects                                    list, create
/// /projects/{prj_id}                           get, update, delete
///
/// /project-cost-rates                          create
/// /project-cost-rates/{prj_id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee::router())
        .nest("/projects", project::router())
        .nest("/project-cost-rates", project_cost_rate::router())
}

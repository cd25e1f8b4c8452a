//! Route definitions for the `/project-cost-rates` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project_cost_rate;
use crate::state::AppState;

/// Routes mounted at `/project-cost-rates`.
///
/// ```text
/// POST   /              -> create
/// GET    /{prj_id}      -> get_by_project
/// PUT    /{prj_id}      -> update
/// DELETE /{prj_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(project_cost_rate::create))
        .route(
            "/{prj_id}",
            get(project_cost_rate::get_by_project)
                .put(project_cost_rate::update)
                .delete(project_cost_rate::delete),
        )
}

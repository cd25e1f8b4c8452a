//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{prj_id}      -> get_by_id
/// PUT    /{prj_id}      -> update
/// DELETE /{prj_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{prj_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}

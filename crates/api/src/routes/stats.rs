//! Route definitions for the `/stats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET    /       -> list (public)
/// POST   /       -> create (admin)
/// GET    /{id}   -> get_by_id (public)
/// PUT    /{id}   -> update (admin)
/// DELETE /{id}   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stats::list).post(stats::create))
        .route(
            "/{id}",
            get(stats::get_by_id)
                .put(stats::update)
                .delete(stats::delete),
        )
}

//! Route definitions for the `/advantages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::advantages;
use crate::state::AppState;

/// Routes mounted at `/advantages`.
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
        .route("/", get(advantages::list).post(advantages::create))
        .route(
            "/{id}",
            get(advantages::get_by_id)
                .put(advantages::update)
                .delete(advantages::delete),
        )
}

//! Route definitions for the `/applications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST   /              -> submit (public)
/// GET    /              -> list (admin)
/// GET    /{id}          -> get_by_id (admin)
/// PUT    /{id}          -> update (admin)
/// DELETE /{id}          -> delete (admin)
/// POST   /{id}/resend   -> resend (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(applications::submit).get(applications::list),
        )
        .route(
            "/{id}",
            get(applications::get_by_id)
                .put(applications::update)
                .delete(applications::delete),
        )
        .route("/{id}/resend", post(applications::resend))
}

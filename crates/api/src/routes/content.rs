//! Route definitions for the `/content` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// GET  /            -> list (public)
/// GET  /{section}   -> get_by_section (public)
/// POST /{section}   -> upsert (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list))
        .route(
            "/{section}",
            get(content::get_by_section).post(content::upsert),
        )
}

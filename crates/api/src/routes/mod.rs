pub mod advantages;
pub mod applications;
pub mod auth;
pub mod content;
pub mod health;
pub mod stats;
pub mod team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /applications                      submit (public POST), list (admin GET)
/// /applications/{id}                 get, update, delete (admin)
/// /applications/{id}/resend          re-dispatch Telegram notification (admin POST)
///
/// /auth/login                        login (public)
/// /auth/verify                       verify token (public)
///
/// /team                              list (public GET), create (admin POST)
/// /team/{id}                         get (public), update, delete (admin)
///
/// /advantages                        list (public GET), create (admin POST)
/// /advantages/{id}                   get (public), update, delete (admin)
///
/// /stats                             list (public GET), create (admin POST)
/// /stats/{id}                        get (public), update, delete (admin)
///
/// /content                           list (public GET)
/// /content/{section}                 get (public), upsert (admin POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/applications", applications::router())
        .nest("/auth", auth::router())
        .nest("/team", team::router())
        .nest("/advantages", advantages::router())
        .nest("/stats", stats::router())
        .nest("/content", content::router())
}

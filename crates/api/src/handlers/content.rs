//! Handlers for the `/content` resource.
//!
//! Sections are keyed by a fixed name rather than an id; writes are
//! upserts so the admin panel never has to care whether a section
//! exists yet.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bulltrade_core::error::CoreError;
use bulltrade_db::models::content::{UpsertContentSection, ALLOWED_SECTIONS};
use bulltrade_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Reject section keys the public site does not render.
fn check_section(section: &str) -> Result<(), CoreError> {
    if ALLOWED_SECTIONS.contains(&section) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown section '{section}'. Expected one of: {}",
            ALLOWED_SECTIONS.join(", ")
        )))
    }
}

/// GET /api/content — list every stored section.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = ContentRepo::list_all(&state.pool).await?;
    Ok(Json(sections))
}

/// GET /api/content/{section}
pub async fn get_by_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> AppResult<impl IntoResponse> {
    match ContentRepo::find_by_section(&state.pool, &section).await? {
        Some(content) => Ok(Json(content).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "message": format!("Content section '{section}' not found"),
                "code": "NOT_FOUND",
            })),
        )
            .into_response()),
    }
}

/// POST /api/content/{section} — create or update a section.
pub async fn upsert(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(input): Json<UpsertContentSection>,
) -> AppResult<impl IntoResponse> {
    check_section(&section)?;
    let content = ContentRepo::upsert(&state.pool, &section, &input).await?;

    tracing::info!(section = %section, username = %admin.username, "Content section updated");

    Ok(Json(content))
}

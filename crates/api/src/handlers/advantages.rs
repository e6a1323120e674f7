//! Handlers for the `/advantages` resource. Public reads, admin writes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bulltrade_core::error::CoreError;
use bulltrade_core::types::DbId;
use bulltrade_db::models::advantage::{CreateAdvantage, UpdateAdvantage, ALLOWED_ICONS};
use bulltrade_db::repositories::AdvantageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// Reject icon names the frontend cannot render.
fn check_icon(icon: &str) -> Result<(), CoreError> {
    if ALLOWED_ICONS.contains(&icon) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown icon '{icon}'. Expected one of: {}",
            ALLOWED_ICONS.join(", ")
        )))
    }
}

/// GET /api/advantages — list in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let advantages = AdvantageRepo::list_all(&state.pool).await?;
    Ok(Json(advantages))
}

/// GET /api/advantages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let advantage = AdvantageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Advantage",
            id,
        })?;
    Ok(Json(advantage))
}

/// POST /api/advantages
pub async fn create(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateAdvantage>,
) -> AppResult<impl IntoResponse> {
    check_icon(&input.icon)?;
    let advantage = AdvantageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(advantage)))
}

/// PUT /api/advantages/{id}
pub async fn update(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdvantage>,
) -> AppResult<impl IntoResponse> {
    if let Some(icon) = &input.icon {
        check_icon(icon)?;
    }
    let advantage = AdvantageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Advantage",
            id,
        })?;
    Ok(Json(advantage))
}

/// DELETE /api/advantages/{id}
pub async fn delete(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AdvantageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Advantage",
            id,
        }));
    }
    Ok(Json(serde_json::json!({ "message": "Advantage deleted" })))
}

//! Handlers for the `/stats` resource. Public reads, admin writes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bulltrade_core::error::CoreError;
use bulltrade_core::types::DbId;
use bulltrade_db::models::stat::{CreateStat, UpdateStat};
use bulltrade_db::repositories::StatRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/stats — list in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = StatRepo::list_all(&state.pool).await?;
    Ok(Json(stats))
}

/// GET /api/stats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stat = StatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Stat", id })?;
    Ok(Json(stat))
}

/// POST /api/stats
pub async fn create(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateStat>,
) -> AppResult<impl IntoResponse> {
    let stat = StatRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(stat)))
}

/// PUT /api/stats/{id}
pub async fn update(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStat>,
) -> AppResult<impl IntoResponse> {
    let stat = StatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Stat", id })?;
    Ok(Json(stat))
}

/// DELETE /api/stats/{id}
pub async fn delete(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StatRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Stat", id }));
    }
    Ok(Json(serde_json::json!({ "message": "Stat deleted" })))
}

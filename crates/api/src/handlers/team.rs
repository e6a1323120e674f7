//! Handlers for the `/team` resource. Public reads, admin writes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bulltrade_core::error::CoreError;
use bulltrade_core::types::DbId;
use bulltrade_db::models::team_member::{CreateTeamMember, UpdateTeamMember};
use bulltrade_db::repositories::TeamRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;

/// GET /api/team — list all members in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let members = TeamRepo::list_all(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/team/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let member = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Team member",
            id,
        })?;
    Ok(Json(member))
}

/// POST /api/team
pub async fn create(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<impl IntoResponse> {
    let member = TeamRepo::create(&state.pool, &input).await?;

    tracing::info!(
        member_id = member.id,
        name = %member.name,
        username = %admin.username,
        "Team member created"
    );

    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/team/{id}
pub async fn update(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<impl IntoResponse> {
    let member = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Team member",
            id,
        })?;
    Ok(Json(member))
}

/// DELETE /api/team/{id}
pub async fn delete(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Team member",
            id,
        }));
    }
    Ok(Json(serde_json::json!({ "message": "Team member deleted" })))
}

//! Handlers for the `/applications` resource.
//!
//! `submit` is the public contact-form pipeline: transport rate cap →
//! honeypot → validation → duplicate throttle → persist → Telegram
//! dispatch → persist outcome. Everything else is admin-only review
//! workflow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;

use bulltrade_core::application::ApplicationStatus;
use bulltrade_core::error::CoreError;
use bulltrade_core::types::DbId;
use bulltrade_core::validation::{validate_email, validate_name, validate_phone};
use bulltrade_db::models::application::{NewApplication, SubmitApplication, UpdateApplication};
use bulltrade_db::repositories::ApplicationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::client_meta::ClientMeta;
use crate::state::AppState;

/// Sliding window for the in-service duplicate throttle.
const DUPLICATE_WINDOW_HOURS: i64 = 1;

/// Prior submissions from one IP inside the window before rejecting.
const MAX_RECENT_SUBMISSIONS: i64 = 2;

const MSG_SUBMITTED: &str = "Заявку успішно надіслано!";
const MSG_TOO_MANY_ATTEMPTS: &str =
    "Занадто багато заявок з цієї IP адреси. Будь ласка, спробуйте через 15 хвилин.";
const MSG_ALREADY_SUBMITTED: &str =
    "Ви вже надіслали заявку. Будь ласка, зачекайте годину перед повторною спробою.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Response body for a successful submission.
///
/// The honeypot branch serializes the same message with no
/// `application` key, so repeated bot submissions get byte-identical
/// bodies.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<SubmittedApplication>,
}

/// The slice of the created row the public caller gets back.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub id: DbId,
    pub telegram_sent: bool,
}

/// Response body for the admin resend action.
#[derive(Debug, Serialize)]
pub struct ResendResponse {
    pub success: bool,
    pub message: &'static str,
    pub error: Option<String>,
}

/// Body for admin deletes.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Public submission
// ---------------------------------------------------------------------------

/// POST /api/applications
///
/// Public contact-form submission. Validation and abuse failures are
/// reported before anything is persisted; a Telegram failure never
/// fails the request.
pub async fn submit(
    State(state): State<AppState>,
    meta: ClientMeta,
    Json(input): Json<SubmitApplication>,
) -> AppResult<impl IntoResponse> {
    // Transport-level cap, checked before any submission logic.
    let ip = meta.ip.clone().unwrap_or_else(|| "unknown".to_string());
    if !state.submission_limiter.check(&ip).await {
        tracing::warn!(ip = %ip, "Submission rate limit exceeded");
        return Err(AppError::Core(CoreError::RateLimited(
            MSG_TOO_MANY_ATTEMPTS.into(),
        )));
    }

    // Honeypot: humans never see the `website` field. Absorb the
    // submission without persisting and answer exactly like a success
    // so the bot learns nothing.
    if input.website.as_deref().is_some_and(|w| !w.trim().is_empty()) {
        tracing::info!(ip = %ip, "Honeypot field filled, absorbing submission");
        return Ok((
            StatusCode::CREATED,
            Json(SubmitResponse {
                message: MSG_SUBMITTED,
                application: None,
            }),
        ));
    }

    // First failing field wins; nothing is persisted on failure.
    let name = validate_name(input.name.as_deref())?;
    let phone = validate_phone(input.phone.as_deref())?;
    let email = validate_email(input.email.as_deref())?;

    // Duplicate throttle: count prior submissions from this IP inside
    // the trailing window. Skipped when the client IP is unknown.
    let mut submission_count = 1;
    if let Some(ip) = &meta.ip {
        let since = Utc::now() - Duration::hours(DUPLICATE_WINDOW_HOURS);
        let recent = ApplicationRepo::count_recent_from_ip(&state.pool, ip, since).await?;
        if recent >= MAX_RECENT_SUBMISSIONS {
            tracing::warn!(ip = %ip, recent, "Duplicate submission throttled");
            return Err(AppError::Core(CoreError::RateLimited(
                MSG_ALREADY_SUBMITTED.into(),
            )));
        }
        submission_count = (recent + 1) as i32;
    }

    let application = ApplicationRepo::create(
        &state.pool,
        &NewApplication {
            name,
            phone,
            email,
            ip_address: meta.ip,
            user_agent: meta.user_agent,
            referer: meta.referer,
            submission_count,
        },
    )
    .await?;

    tracing::info!(
        application_id = application.id,
        submission_count,
        "Application created"
    );

    // Dispatch and record the outcome. The second write is a separate
    // statement; a crash in between leaves sent=false/error=null, which
    // the admin resend path recovers.
    let outcome = state.notifier.notify(&application).await;
    let application = ApplicationRepo::set_delivery_outcome(
        &state.pool,
        application.id,
        outcome.sent,
        outcome.error.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::InternalError("Application vanished mid-request".into()))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: MSG_SUBMITTED,
            application: Some(SubmittedApplication {
                id: application.id,
                telegram_sent: application.telegram_sent,
            }),
        }),
    ))
}

// ---------------------------------------------------------------------------
// Admin review workflow
// ---------------------------------------------------------------------------

/// GET /api/applications
///
/// List all applications, newest first.
pub async fn list(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let applications = ApplicationRepo::list_all(&state.pool).await?;
    Ok(Json(applications))
}

/// GET /api/applications/{id}
pub async fn get_by_id(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Application",
            id,
        })?;
    Ok(Json(application))
}

/// PUT /api/applications/{id}
///
/// Update status and/or notes. The status is a flat label: any value
/// of the enum may follow any other, but values outside the enum are
/// rejected.
pub async fn update(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplication>,
) -> AppResult<impl IntoResponse> {
    let status = input
        .status
        .as_deref()
        .map(ApplicationStatus::parse)
        .transpose()?;

    let application = ApplicationRepo::update(
        &state.pool,
        id,
        status.map(ApplicationStatus::as_str),
        input.notes.as_deref(),
    )
    .await?
    .ok_or(CoreError::NotFound {
        entity: "Application",
        id,
    })?;

    Ok(Json(application))
}

/// DELETE /api/applications/{id}
pub async fn delete(
    _admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ApplicationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }));
    }
    Ok(Json(DeletedResponse {
        message: "Application deleted",
    }))
}

/// POST /api/applications/{id}/resend
///
/// Re-dispatch the Telegram notification for an existing application,
/// overwriting the stored outcome in either direction.
pub async fn resend(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Application",
            id,
        })?;

    let outcome = state.notifier.notify(&application).await;
    ApplicationRepo::set_delivery_outcome(
        &state.pool,
        id,
        outcome.sent,
        outcome.error.as_deref(),
    )
    .await?;

    tracing::info!(
        application_id = id,
        username = %admin.username,
        sent = outcome.sent,
        "Telegram resend attempted"
    );

    Ok(Json(ResendResponse {
        success: outcome.sent,
        message: if outcome.sent {
            "Відправлено в Telegram!"
        } else {
            "Помилка відправки"
        },
        error: outcome.error,
    }))
}

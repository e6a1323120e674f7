//! Application model: a candidate's submitted contact request.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bulltrade_core::types::{DbId, Timestamp};

/// A row from the `applications` table.
///
/// `status` is stored as text; [`bulltrade_core::application::ApplicationStatus`]
/// is the authority on valid values.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub notes: String,
    pub telegram_sent: bool,
    pub telegram_error: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub submission_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for a validated, accepted submission.
///
/// Fields are already normalized by the validation module; this struct
/// never carries raw user input.
#[derive(Debug)]
pub struct NewApplication {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub submission_count: i32,
}

/// Body of the public `POST /api/applications` endpoint.
///
/// All fields are optional at the deserialization boundary so missing
/// ones produce our own 400 messages instead of a serde rejection.
/// `website` is the honeypot field: hidden from humans, so any
/// non-empty value marks the sender as a bot.
#[derive(Debug, Deserialize)]
pub struct SubmitApplication {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

/// Body of the admin `PUT /api/applications/{id}` endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateApplication {
    pub status: Option<String>,
    pub notes: Option<String>,
}

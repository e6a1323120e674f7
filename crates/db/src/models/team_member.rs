//! Team member model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bulltrade_core::types::{DbId, Timestamp};

/// A row from the `team_members` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub initials: Option<String>,
    pub photo: Option<String>,
    pub description: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a team member.
#[derive(Debug, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub role: String,
    pub initials: Option<String>,
    pub photo: Option<String>,
    pub description: String,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
}

/// DTO for updating a team member. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub initials: Option<String>,
    pub photo: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

//! Advantage card model ("why work with us" section).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bulltrade_core::types::{DbId, Timestamp};

/// Icon names the frontend knows how to render.
pub const ALLOWED_ICONS: &[&str] = &[
    "TrendingUp",
    "Wallet",
    "Users",
    "GraduationCap",
    "Clock",
    "Shield",
];

/// A row from the `advantages` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Advantage {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an advantage.
#[derive(Debug, Deserialize)]
pub struct CreateAdvantage {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: Option<String>,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
}

/// DTO for updating an advantage. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateAdvantage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

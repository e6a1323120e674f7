//! Headline statistic model (e.g. "500+ traders").

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bulltrade_core::types::{DbId, Timestamp};

/// A row from the `stats` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub id: DbId,
    pub value: String,
    pub label: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a stat.
#[derive(Debug, Deserialize)]
pub struct CreateStat {
    pub value: String,
    pub label: String,
    #[serde(rename = "order", default)]
    pub sort_order: i32,
}

/// DTO for updating a stat. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateStat {
    pub value: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

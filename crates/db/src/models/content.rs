//! Editable page-section content.
//!
//! Each row is keyed by a fixed section name. Most fields are optional
//! presentational strings; `content` holds anything the admin panel
//! stores beyond the named fields.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use bulltrade_core::types::{DbId, Timestamp};

/// Section keys the public site knows how to render.
pub const ALLOWED_SECTIONS: &[&str] =
    &["hero", "about", "advantages", "team", "contact", "footer"];

/// A row from the `content_sections` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: DbId,
    pub section: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub title_highlight: Option<String>,
    pub paragraph1: Option<String>,
    pub paragraph2: Option<String>,
    pub paragraph3: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub viber: Option<String>,
    pub facebook: Option<String>,
    pub content: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a section. The section key comes from the URL,
/// never from the body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContentSection {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub title_highlight: Option<String>,
    pub paragraph1: Option<String>,
    pub paragraph2: Option<String>,
    pub paragraph3: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub viber: Option<String>,
    pub facebook: Option<String>,
    pub content: Option<serde_json::Value>,
}

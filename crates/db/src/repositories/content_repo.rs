//! Repository for the `content_sections` table.

use sqlx::PgPool;

use crate::models::content::{ContentSection, UpsertContentSection};

const COLUMNS: &str = "id, section, title, subtitle, description, button_text, title_highlight, \
    paragraph1, paragraph2, paragraph3, phone, email, instagram, telegram, viber, facebook, \
    content, created_at, updated_at";

/// Section-keyed read/upsert for page content.
pub struct ContentRepo;

impl ContentRepo {
    /// List every stored section.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ContentSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_sections ORDER BY section ASC");
        sqlx::query_as::<_, ContentSection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch one section by key.
    pub async fn find_by_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Option<ContentSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_sections WHERE section = $1");
        sqlx::query_as::<_, ContentSection>(&query)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    /// Create or update a section by key.
    ///
    /// Fields absent from the payload keep their stored values, so a
    /// partial edit from the admin panel does not wipe the rest of the
    /// section.
    pub async fn upsert(
        pool: &PgPool,
        section: &str,
        input: &UpsertContentSection,
    ) -> Result<ContentSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_sections
                (section, title, subtitle, description, button_text, title_highlight,
                 paragraph1, paragraph2, paragraph3, phone, email, instagram, telegram,
                 viber, facebook, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             ON CONFLICT (section) DO UPDATE SET
                title = COALESCE(EXCLUDED.title, content_sections.title),
                subtitle = COALESCE(EXCLUDED.subtitle, content_sections.subtitle),
                description = COALESCE(EXCLUDED.description, content_sections.description),
                button_text = COALESCE(EXCLUDED.button_text, content_sections.button_text),
                title_highlight = COALESCE(EXCLUDED.title_highlight, content_sections.title_highlight),
                paragraph1 = COALESCE(EXCLUDED.paragraph1, content_sections.paragraph1),
                paragraph2 = COALESCE(EXCLUDED.paragraph2, content_sections.paragraph2),
                paragraph3 = COALESCE(EXCLUDED.paragraph3, content_sections.paragraph3),
                phone = COALESCE(EXCLUDED.phone, content_sections.phone),
                email = COALESCE(EXCLUDED.email, content_sections.email),
                instagram = COALESCE(EXCLUDED.instagram, content_sections.instagram),
                telegram = COALESCE(EXCLUDED.telegram, content_sections.telegram),
                viber = COALESCE(EXCLUDED.viber, content_sections.viber),
                facebook = COALESCE(EXCLUDED.facebook, content_sections.facebook),
                content = COALESCE(EXCLUDED.content, content_sections.content),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentSection>(&query)
            .bind(section)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.description)
            .bind(&input.button_text)
            .bind(&input.title_highlight)
            .bind(&input.paragraph1)
            .bind(&input.paragraph2)
            .bind(&input.paragraph3)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.instagram)
            .bind(&input.telegram)
            .bind(&input.viber)
            .bind(&input.facebook)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }
}

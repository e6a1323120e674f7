//! Repository for the `advantages` table.

use sqlx::PgPool;

use bulltrade_core::types::DbId;

use crate::models::advantage::{Advantage, CreateAdvantage, UpdateAdvantage};

const COLUMNS: &str = "id, title, description, icon, color, sort_order, created_at, updated_at";

/// CRUD operations for advantage cards.
pub struct AdvantageRepo;

impl AdvantageRepo {
    pub async fn create(pool: &PgPool, input: &CreateAdvantage) -> Result<Advantage, sqlx::Error> {
        let color = input.color.as_deref().unwrap_or("text-primary");
        let query = format!(
            "INSERT INTO advantages (title, description, icon, color, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advantage>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(color)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Advantage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advantages WHERE id = $1");
        sqlx::query_as::<_, Advantage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all advantages in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Advantage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advantages ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, Advantage>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdvantage,
    ) -> Result<Option<Advantage>, sqlx::Error> {
        let query = format!(
            "UPDATE advantages
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 icon = COALESCE($4, icon),
                 color = COALESCE($5, color),
                 sort_order = COALESCE($6, sort_order),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advantage>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.color)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM advantages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

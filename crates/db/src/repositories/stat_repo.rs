//! Repository for the `stats` table.

use sqlx::PgPool;

use bulltrade_core::types::DbId;

use crate::models::stat::{CreateStat, Stat, UpdateStat};

const COLUMNS: &str = "id, value, label, sort_order, created_at, updated_at";

/// CRUD operations for headline stats.
pub struct StatRepo;

impl StatRepo {
    pub async fn create(pool: &PgPool, input: &CreateStat) -> Result<Stat, sqlx::Error> {
        let query = format!(
            "INSERT INTO stats (value, label, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(&input.value)
            .bind(&input.label)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats WHERE id = $1");
        sqlx::query_as::<_, Stat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all stats in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Stat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats ORDER BY sort_order ASC, id ASC");
        sqlx::query_as::<_, Stat>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStat,
    ) -> Result<Option<Stat>, sqlx::Error> {
        let query = format!(
            "UPDATE stats
             SET value = COALESCE($2, value),
                 label = COALESCE($3, label),
                 sort_order = COALESCE($4, sort_order),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(id)
            .bind(&input.value)
            .bind(&input.label)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

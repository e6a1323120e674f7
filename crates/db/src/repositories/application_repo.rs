//! Repository for the `applications` table.

use sqlx::PgPool;

use bulltrade_core::types::{DbId, Timestamp};

use crate::models::application::{Application, NewApplication};

/// Column list for applications queries.
const COLUMNS: &str = "id, name, phone, email, status, notes, telegram_sent, telegram_error, \
    ip_address, user_agent, referer, submission_count, created_at, updated_at";

/// CRUD plus the submission-pipeline queries for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a validated submission with status `new`, returning the row.
    pub async fn create(pool: &PgPool, input: &NewApplication) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications
                (name, phone, email, ip_address, user_agent, referer, submission_count)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .bind(&input.referer)
            .bind(input.submission_count)
            .fetch_one(pool)
            .await
    }

    /// Find an application by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all applications, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications ORDER BY created_at DESC");
        sqlx::query_as::<_, Application>(&query).fetch_all(pool).await
    }

    /// Count applications from one IP created at or after `since`.
    ///
    /// Backs the duplicate-submission throttle. The count-then-insert
    /// sequence is not atomic; concurrent submissions from one IP can
    /// both observe the lower count. Accepted for a single-writer
    /// deployment.
    pub async fn count_recent_from_ip(
        pool: &PgPool,
        ip_address: &str,
        since: Timestamp,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM applications WHERE ip_address = $1 AND created_at >= $2",
        )
        .bind(ip_address)
        .bind(since)
        .fetch_one(pool)
        .await
    }

    /// Update status and/or notes, returning the updated row.
    ///
    /// `None` leaves the column unchanged. Status strings are validated
    /// by the caller before reaching this query.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        status: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications
             SET status = COALESCE($2, status),
                 notes = COALESCE($3, notes),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Record the Telegram delivery outcome, overwriting both fields.
    pub async fn set_delivery_outcome(
        pool: &PgPool,
        id: DbId,
        sent: bool,
        error: Option<&str>,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications
             SET telegram_sent = $2, telegram_error = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(sent)
            .bind(error)
            .fetch_optional(pool)
            .await
    }

    /// Delete an application. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `requests` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgExecutor, PgPool};

use modqueue_core::beatmap::SubmissionCandidate;
use modqueue_core::moderation::STATUS_PENDING;
use modqueue_core::types::{DbId, Timestamp};

use crate::models::request::{Request, UpdateRequest};

/// Column list for requests queries.
const COLUMNS: &str = "id, user_id, owner_id, beatmapset_id, title, artist, creator, bpm, \
    length, comment, cross_mod, variants, review_status, image_url, archived, status, \
    feedback, created_at, updated_at";

/// Default page size for queue listings.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Largest page size a caller may ask for.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Provides CRUD operations for requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert an accepted candidate, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        user_id: DbId,
        owner_id: DbId,
        candidate: &SubmissionCandidate,
        created_at: Timestamp,
    ) -> Result<Request, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests
                (user_id, owner_id, beatmapset_id, title, artist, creator, bpm, length,
                 comment, cross_mod, variants, review_status, image_url, status,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(user_id)
            .bind(owner_id)
            .bind(candidate.beatmapset_id)
            .bind(&candidate.title)
            .bind(&candidate.artist)
            .bind(&candidate.creator)
            .bind(candidate.bpm)
            .bind(&candidate.length)
            .bind(&candidate.comment)
            .bind(candidate.cross_mod)
            .bind(Json(&candidate.variants))
            .bind(&candidate.review_status)
            .bind(&candidate.image_url)
            .bind(STATUS_PENDING)
            .bind(created_at)
            .fetch_one(conn)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Request>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Creation time of the user's most recent request to a queue.
    pub async fn find_latest_created_at<'e>(
        executor: impl PgExecutor<'e>,
        user_id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT created_at FROM requests
             WHERE user_id = $1 AND owner_id = $2
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .bind(owner_id)
        .fetch_optional(executor)
        .await
    }

    /// Number of pending, non-archived requests in a queue.
    pub async fn count_pending<'e>(
        executor: impl PgExecutor<'e>,
        owner_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM requests
             WHERE owner_id = $1 AND archived = FALSE AND status = $2",
        )
        .bind(owner_id)
        .bind(STATUS_PENDING)
        .fetch_one(executor)
        .await
    }

    /// List a queue's requests, newest first.
    ///
    /// `archived` filters on the archived flag when given.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
        archived: Option<bool>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Request>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requests
             WHERE owner_id = $1 AND ($2::BOOLEAN IS NULL OR archived = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(owner_id)
            .bind(archived)
            .bind(clamp_limit(limit))
            .bind(offset.unwrap_or(0).max(0))
            .fetch_all(pool)
            .await
    }

    /// List every request a user has submitted, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Request>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requests
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a moderation update. Returns `None` if the request does not exist.
    pub async fn update_moderation(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequest,
    ) -> Result<Option<Request>, sqlx::Error> {
        let query = format!(
            "UPDATE requests SET
                status = COALESCE($2, status),
                feedback = COALESCE($3, feedback),
                archived = COALESCE($4, archived),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(input.status.as_ref().map(|s| s.as_str()))
            .bind(&input.feedback)
            .bind(input.archived)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request, only if it belongs to `user_id`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_for_user(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None), DEFAULT_LIST_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(10_000)), MAX_LIST_LIMIT);
    }
}

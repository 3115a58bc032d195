//! Repository for the `queues` table.

use sqlx::{PgConnection, PgPool};

use modqueue_core::types::DbId;

use crate::models::queue::{Queue, UpsertQueue};

/// Column list for queues queries.
const COLUMNS: &str = "owner_id, owner_name, moderator_tier, accepted_categories, is_open, \
    cooldown_days, max_pending, created_at, updated_at";

/// Provides CRUD operations for queue configuration.
pub struct QueueRepo;

impl QueueRepo {
    /// Find a queue by its owner.
    pub async fn find_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Option<Queue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM queues WHERE owner_id = $1");
        sqlx::query_as::<_, Queue>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all queues, open queues first, then by owner name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Queue>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM queues ORDER BY is_open DESC, owner_name ASC"
        );
        sqlx::query_as::<_, Queue>(&query).fetch_all(pool).await
    }

    /// Create the owner's queue or replace its configuration.
    pub async fn upsert(
        pool: &PgPool,
        owner_id: DbId,
        owner_name: &str,
        input: &UpsertQueue,
    ) -> Result<Queue, sqlx::Error> {
        let query = format!(
            "INSERT INTO queues
                (owner_id, owner_name, moderator_tier, accepted_categories, is_open,
                 cooldown_days, max_pending)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (owner_id) DO UPDATE SET
                owner_name = EXCLUDED.owner_name,
                moderator_tier = EXCLUDED.moderator_tier,
                accepted_categories = EXCLUDED.accepted_categories,
                is_open = EXCLUDED.is_open,
                cooldown_days = EXCLUDED.cooldown_days,
                max_pending = EXCLUDED.max_pending,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Queue>(&query)
            .bind(owner_id)
            .bind(owner_name)
            .bind(input.moderator_tier.as_str())
            .bind(&input.accepted_categories)
            .bind(input.open)
            .bind(input.cooldown_days)
            .bind(input.max_pending)
            .fetch_one(pool)
            .await
    }

    /// Load a queue and hold a row lock on it until the surrounding
    /// transaction ends. Concurrent submissions to the same queue wait here.
    pub async fn lock_for_update(
        conn: &mut PgConnection,
        owner_id: DbId,
    ) -> Result<Option<Queue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM queues WHERE owner_id = $1 FOR UPDATE");
        sqlx::query_as::<_, Queue>(&query)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
    }

    /// Stop a queue from taking further submissions.
    pub async fn close(conn: &mut PgConnection, owner_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE queues SET is_open = FALSE, updated_at = NOW() WHERE owner_id = $1")
            .bind(owner_id)
            .execute(conn)
            .await?;
        Ok(())
    }
}

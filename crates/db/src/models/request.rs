//! Request models (submissions stored in a queue).

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use modqueue_core::beatmap::Variant;
use modqueue_core::moderation::ModerationStatus;
use modqueue_core::types::{DbId, Timestamp};

/// Longest feedback text an owner may attach to a request.
pub const MAX_FEEDBACK_LEN: u64 = 2000;

/// A row from the `requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub user_id: DbId,
    pub owner_id: DbId,
    pub beatmapset_id: DbId,
    pub title: String,
    pub artist: String,
    pub creator: String,
    pub bpm: f64,
    pub length: String,
    pub comment: String,
    pub cross_mod: bool,
    pub variants: Json<Vec<Variant>>,
    pub review_status: String,
    pub image_url: String,
    pub archived: bool,
    #[sqlx(try_from = "String")]
    pub status: ModerationStatus,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Request {
    /// Whether this request occupies a slot in its queue. Mirrors the
    /// filter used by `RequestRepo::count_pending`.
    pub fn counts_toward_capacity(&self) -> bool {
        !self.archived && self.status.is_pending()
    }
}

/// DTO for a queue owner's moderation action. Absent fields are unchanged.
///
/// `status` is checked separately with
/// [`modqueue_core::moderation::validate_status`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRequest {
    pub status: Option<ModerationStatus>,
    #[validate(length(max = MAX_FEEDBACK_LEN))]
    pub feedback: Option<String>,
    pub archived: Option<bool>,
}

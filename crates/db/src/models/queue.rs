//! Queue configuration models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use modqueue_core::queue::{validate_categories, ModeratorTier, QueueSettings};
use modqueue_core::types::{DbId, Timestamp};

/// A row from the `queues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Queue {
    pub owner_id: DbId,
    pub owner_name: String,
    pub moderator_tier: String,
    pub accepted_categories: Vec<String>,
    #[sqlx(rename = "is_open")]
    pub open: bool,
    pub cooldown_days: f64,
    pub max_pending: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Queue {
    /// Convert the row into the settings value the admission engine takes.
    pub fn settings(&self) -> Result<QueueSettings, sqlx::Error> {
        let moderator_tier = self
            .moderator_tier
            .parse::<ModeratorTier>()
            .map_err(|e| sqlx::Error::Decode(e.into()))?;

        Ok(QueueSettings {
            owner_id: self.owner_id,
            owner_name: self.owner_name.clone(),
            moderator_tier,
            accepted_categories: self.accepted_categories.clone(),
            open: self.open,
            cooldown_days: self.cooldown_days,
            max_pending: self.max_pending,
        })
    }
}

/// DTO for creating or replacing the caller's queue configuration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertQueue {
    pub moderator_tier: ModeratorTier,
    #[validate(custom(function = "check_categories"))]
    pub accepted_categories: Vec<String>,
    #[serde(default = "default_open")]
    pub open: bool,
    #[validate(range(min = 0.0, max = 365.0))]
    pub cooldown_days: f64,
    #[validate(range(min = 1, max = 1000))]
    pub max_pending: i32,
}

fn default_open() -> bool {
    true
}

#[allow(clippy::ptr_arg)]
fn check_categories(categories: &Vec<String>) -> Result<(), ValidationError> {
    validate_categories(categories).map_err(|msg| {
        let mut err = ValidationError::new("accepted_categories");
        err.message = Some(msg.into());
        err
    })
}

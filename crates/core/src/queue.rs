//! Per-owner queue configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Game mode labels accepted as queue categories.
pub const CATEGORY_OSU: &str = "osu";
pub const CATEGORY_TAIKO: &str = "taiko";
pub const CATEGORY_CATCH: &str = "catch";
pub const CATEGORY_MANIA: &str = "mania";

/// All valid category labels.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_OSU, CATEGORY_TAIKO, CATEGORY_CATCH, CATEGORY_MANIA];

/// Privilege level of a queue owner.
///
/// `Full` and `Probation` moderators review maps that are still awaiting
/// rank, so their queues only take `Pending` submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeratorTier {
    Full,
    Probation,
    Plain,
}

impl ModeratorTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ModeratorTier::Full => "full",
            ModeratorTier::Probation => "probation",
            ModeratorTier::Plain => "plain",
        }
    }

    /// Whether this tier carries elevated reviewer privileges.
    pub fn is_elevated(self) -> bool {
        matches!(self, ModeratorTier::Full | ModeratorTier::Probation)
    }
}

impl fmt::Display for ModeratorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeratorTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(ModeratorTier::Full),
            "probation" => Ok(ModeratorTier::Probation),
            "plain" => Ok(ModeratorTier::Plain),
            other => Err(format!(
                "Invalid moderator tier '{other}'. Must be one of: full, probation, plain"
            )),
        }
    }
}

/// Configuration of one owner's queue, passed explicitly into each evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueSettings {
    pub owner_id: DbId,
    pub owner_name: String,
    pub moderator_tier: ModeratorTier,
    /// Never empty.
    pub accepted_categories: Vec<String>,
    pub open: bool,
    pub cooldown_days: f64,
    pub max_pending: i32,
}

impl QueueSettings {
    pub fn accepts_category(&self, category: &str) -> bool {
        self.accepted_categories.iter().any(|c| c == category)
    }
}

/// Validate that every category label is known and that at least one is given.
pub fn validate_categories(categories: &[String]) -> Result<(), String> {
    if categories.is_empty() {
        return Err("At least one accepted category is required".to_string());
    }
    if let Some(bad) = categories
        .iter()
        .find(|c| !VALID_CATEGORIES.contains(&c.as_str()))
    {
        return Err(format!(
            "Invalid category '{bad}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ));
    }
    Ok(())
}

//! Moderation status assigned to a request by the queue owner.
//!
//! Owners may move a request between any two statuses; no transition table
//! is enforced. Unrecognised labels are kept verbatim in
//! [`ModerationStatus::Custom`] so older rows and client-defined labels
//! survive a round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_ACCEPTED: &str = "Accepted";
pub const STATUS_REJECTED: &str = "Rejected";
pub const STATUS_NOMINATED: &str = "Nominated";
pub const STATUS_FINISHED: &str = "Finished";

/// Longest custom status label an owner may set.
pub const MAX_CUSTOM_STATUS_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModerationStatus {
    Pending,
    Accepted,
    Rejected,
    Nominated,
    Finished,
    Custom(String),
}

impl ModerationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ModerationStatus::Pending => STATUS_PENDING,
            ModerationStatus::Accepted => STATUS_ACCEPTED,
            ModerationStatus::Rejected => STATUS_REJECTED,
            ModerationStatus::Nominated => STATUS_NOMINATED,
            ModerationStatus::Finished => STATUS_FINISHED,
            ModerationStatus::Custom(label) => label,
        }
    }

    /// Pending requests count towards the queue's capacity.
    pub fn is_pending(&self) -> bool {
        matches!(self, ModerationStatus::Pending)
    }
}

impl From<String> for ModerationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            STATUS_PENDING => ModerationStatus::Pending,
            STATUS_ACCEPTED => ModerationStatus::Accepted,
            STATUS_REJECTED => ModerationStatus::Rejected,
            STATUS_NOMINATED => ModerationStatus::Nominated,
            STATUS_FINISHED => ModerationStatus::Finished,
            _ => ModerationStatus::Custom(value),
        }
    }
}

impl From<&str> for ModerationStatus {
    fn from(value: &str) -> Self {
        ModerationStatus::from(value.to_string())
    }
}

impl From<ModerationStatus> for String {
    fn from(value: ModerationStatus) -> Self {
        match value {
            ModerationStatus::Custom(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a status an owner is about to assign.
pub fn validate_status(status: &ModerationStatus) -> Result<(), String> {
    match status {
        ModerationStatus::Custom(label) if label.trim().is_empty() => {
            Err("Status must not be empty".to_string())
        }
        ModerationStatus::Custom(label) if label.chars().count() > MAX_CUSTOM_STATUS_LEN => Err(
            format!("Status must be at most {MAX_CUSTOM_STATUS_LEN} characters"),
        ),
        _ => Ok(()),
    }
}

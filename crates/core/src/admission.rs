//! Admission rules for submissions to a request queue.
//!
//! [`evaluate`] runs every rule against a candidate and collects one reason
//! per violated rule, so a rejected submitter sees all problems at once.
//! Rules run in a fixed order and never short-circuit each other. An empty
//! reason list means the candidate is accepted; persisting it is the
//! caller's job.

use serde::Serialize;

use crate::beatmap::SubmissionCandidate;
use crate::cooldown::cooldown_reason;
use crate::normalize::INVALID_SOURCE_ID_REASON;
use crate::queue::QueueSettings;
use crate::types::{DbId, Timestamp};

/// Longest accepted submission comment, in characters.
pub const MAX_COMMENT_LEN: usize = 500;

/// Review status required by elevated moderators.
pub const REQUIRED_REVIEW_STATUS: &str = "Pending";

pub const REASON_NOT_YOURS: &str = "This map isn't yours";
pub const REASON_COMMENT_TOO_LONG: &str = "Comment is excessively long";
pub const REASON_CLOSED: &str = "Requests are closed";

/// The user submitting a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub user_id: DbId,
    /// Display name, compared against the mapset's creator.
    pub username: String,
}

/// Everything about the target queue an evaluation needs.
#[derive(Debug, Clone)]
pub struct AdmissionContext<'a> {
    pub requester: &'a Requester,
    pub owner_id: DbId,
    pub settings: &'a QueueSettings,
    /// Creation time of the requester's most recent request to this queue.
    pub last_request_at: Option<Timestamp>,
    /// Pending, non-archived requests currently in the queue.
    pub pending_count: i64,
    pub now: Timestamp,
}

impl AdmissionContext<'_> {
    pub fn is_self_submission(&self) -> bool {
        self.requester.user_id == self.owner_id
    }

    /// Pending count the queue will hold once this candidate is stored.
    pub fn pending_after_accept(&self) -> i64 {
        self.pending_count + 1
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionDecision {
    pub candidate: SubmissionCandidate,
    pub reasons: Vec<String>,
}

impl AdmissionDecision {
    /// Decision for an id the metadata provider does not know.
    pub fn invalid_source() -> Self {
        Self {
            candidate: SubmissionCandidate::default(),
            reasons: vec![INVALID_SOURCE_ID_REASON.to_string()],
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Run the admission rules for one candidate.
///
/// Owners may always submit to their own queue, so self-submissions skip
/// the rules entirely.
pub fn evaluate(candidate: SubmissionCandidate, ctx: &AdmissionContext<'_>) -> AdmissionDecision {
    if ctx.is_self_submission() {
        return AdmissionDecision {
            candidate,
            reasons: Vec::new(),
        };
    }

    let settings = ctx.settings;
    let reasons = [
        check_category(&candidate, settings),
        check_review_status(&candidate, settings),
        check_ownership(&candidate, ctx.requester),
        check_comment(&candidate),
        check_open(settings),
        cooldown_reason(ctx.last_request_at, settings.cooldown_days, ctx.now),
    ]
    .into_iter()
    .flatten()
    .collect();

    AdmissionDecision { candidate, reasons }
}

fn check_category(candidate: &SubmissionCandidate, settings: &QueueSettings) -> Option<String> {
    if candidate
        .variants
        .iter()
        .any(|v| settings.accepts_category(&v.category))
    {
        return None;
    }

    match settings.accepted_categories.as_slice() {
        [only] => Some(format!("Only {only} maps are accepted")),
        many => Some(format!(
            "Must be one of the following gamemodes: {}",
            many.join(", ")
        )),
    }
}

fn check_review_status(candidate: &SubmissionCandidate, settings: &QueueSettings) -> Option<String> {
    if settings.moderator_tier.is_elevated() && candidate.review_status != REQUIRED_REVIEW_STATUS {
        Some(format!(
            "Expected a {REQUIRED_REVIEW_STATUS} map (this is {})",
            candidate.review_status
        ))
    } else {
        None
    }
}

fn check_ownership(candidate: &SubmissionCandidate, requester: &Requester) -> Option<String> {
    (candidate.creator != requester.username).then(|| REASON_NOT_YOURS.to_string())
}

fn check_comment(candidate: &SubmissionCandidate) -> Option<String> {
    (candidate.comment.chars().count() > MAX_COMMENT_LEN)
        .then(|| REASON_COMMENT_TOO_LONG.to_string())
}

fn check_open(settings: &QueueSettings) -> Option<String> {
    (!settings.open).then(|| REASON_CLOSED.to_string())
}

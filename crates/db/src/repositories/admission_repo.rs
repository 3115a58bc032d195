//! Serialized admission of a candidate into a queue.
//!
//! The queue row is locked for the whole evaluate-insert-close sequence, so
//! two submissions to the same queue cannot both observe room for one more
//! request.

use sqlx::PgPool;

use modqueue_core::admission::{evaluate, AdmissionContext, AdmissionDecision, Requester};
use modqueue_core::beatmap::SubmissionCandidate;
use modqueue_core::capacity;
use modqueue_core::types::{DbId, Timestamp};

use crate::models::request::Request;
use crate::repositories::{QueueRepo, RequestRepo};

/// Result of an admission attempt against an existing queue.
#[derive(Debug)]
pub enum AdmissionOutcome {
    /// The candidate was stored. `queue_closed` is set when this request
    /// filled the queue.
    Accepted { request: Request, queue_closed: bool },
    /// At least one rule failed; nothing was written.
    Rejected(AdmissionDecision),
}

pub struct AdmissionRepo;

impl AdmissionRepo {
    /// Evaluate `candidate` against the owner's queue and store it if accepted.
    ///
    /// Returns `None` if the owner has no queue.
    pub async fn admit(
        pool: &PgPool,
        requester: &Requester,
        owner_id: DbId,
        candidate: SubmissionCandidate,
        now: Timestamp,
    ) -> Result<Option<AdmissionOutcome>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(queue) = QueueRepo::lock_for_update(&mut tx, owner_id).await? else {
            return Ok(None);
        };
        let settings = queue.settings()?;

        let last_request_at =
            RequestRepo::find_latest_created_at(&mut *tx, requester.user_id, owner_id).await?;
        let pending_count = RequestRepo::count_pending(&mut *tx, owner_id).await?;

        let ctx = AdmissionContext {
            requester,
            owner_id,
            settings: &settings,
            last_request_at,
            pending_count,
            now,
        };
        let decision = evaluate(candidate, &ctx);

        if !decision.is_accepted() {
            // Dropping the transaction rolls it back and releases the lock.
            return Ok(Some(AdmissionOutcome::Rejected(decision)));
        }

        let request =
            RequestRepo::create(&mut tx, requester.user_id, owner_id, &decision.candidate, now)
                .await?;

        let queue_closed =
            settings.open && capacity::should_close(ctx.pending_after_accept(), settings.max_pending);
        if queue_closed {
            QueueRepo::close(&mut tx, owner_id).await?;
            tracing::info!(
                owner_id,
                pending = ctx.pending_after_accept(),
                max_pending = settings.max_pending,
                "Queue reached capacity and was closed"
            );
        }

        tx.commit().await?;

        Ok(Some(AdmissionOutcome::Accepted {
            request,
            queue_closed,
        }))
    }
}

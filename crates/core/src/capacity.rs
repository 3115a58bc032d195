//! Automatic queue closing once capacity is reached.
//!
//! Only ever closes a queue. Reopening is an explicit owner action.

/// Whether a queue holding `pending_count` pending requests (including the
/// one just accepted) must stop taking submissions.
pub fn should_close(pending_count: i64, max_pending: i32) -> bool {
    pending_count >= i64::from(max_pending)
}

//! Minimum wait between two submissions from one user to one queue.

use crate::rounding::round2;
use crate::types::Timestamp;

pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Days left before another submission is allowed, unrounded.
///
/// `None` when there is no prior request or the cooldown has fully elapsed.
/// An elapsed time exactly equal to the cooldown counts as elapsed.
pub fn remaining_days(
    last_request_at: Option<Timestamp>,
    cooldown_days: f64,
    now: Timestamp,
) -> Option<f64> {
    let last = last_request_at?;
    let elapsed_ms = (now - last).num_milliseconds() as f64;
    let cooldown_ms = cooldown_days * MS_PER_DAY;

    if elapsed_ms >= cooldown_ms {
        None
    } else {
        Some((cooldown_ms - elapsed_ms) / MS_PER_DAY)
    }
}

/// Reason string for a submission still inside its cooldown window.
pub fn cooldown_reason(
    last_request_at: Option<Timestamp>,
    cooldown_days: f64,
    now: Timestamp,
) -> Option<String> {
    remaining_days(last_request_at, cooldown_days, now).map(|days| {
        format!(
            "You need to wait {} days before you can request again",
            round2(days)
        )
    })
}

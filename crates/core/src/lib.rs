//! Domain logic for request queues.
//!
//! Everything in this crate is pure: no database, no HTTP. The API crate
//! fetches inputs, calls into [`admission::evaluate`], and persists the
//! outcome.

pub mod admission;
pub mod beatmap;
pub mod capacity;
pub mod cooldown;
pub mod error;
pub mod moderation;
pub mod normalize;
pub mod queue;
pub mod rounding;
pub mod types;

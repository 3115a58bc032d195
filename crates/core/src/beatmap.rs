//! Beatmap metadata types shared between the lookup provider, the
//! normalizer, and persistence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Cover image template. `{set_id}` is substituted with the beatmapset id.
pub const COVER_URL_TEMPLATE: &str = "https://assets.ppy.sh/beatmaps/{set_id}/covers/cover.jpg";

/// One difficulty of a beatmapset exactly as returned by the metadata
/// provider, after wire decoding but before normalization.
///
/// Set-level fields (`title`, `artist`, ...) are repeated on every
/// difficulty by the provider; only the first difficulty's copy is used.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBeatmap {
    pub beatmapset_id: DbId,
    pub title: String,
    pub artist: String,
    pub creator: String,
    pub bpm: f64,
    /// Total drain length in seconds.
    pub total_length: u32,
    /// Ranked status label, e.g. `"Pending"` or `"Ranked"`.
    pub status: String,
    /// Difficulty name.
    pub version: String,
    /// Game mode label, e.g. `"osu"` or `"taiko"`.
    pub mode: String,
    pub difficulty_rating: f64,
}

/// One difficulty of a submitted mapset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub category: String,
    /// Star rating, always rounded to two decimal places.
    pub difficulty_rating: f64,
}

/// A submission built from provider metadata, not yet persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionCandidate {
    pub beatmapset_id: DbId,
    pub title: String,
    pub artist: String,
    pub creator: String,
    pub bpm: f64,
    /// Drain length formatted as `M:SS`.
    pub length: String,
    pub comment: String,
    pub cross_mod: bool,
    /// Sorted ascending by `difficulty_rating`.
    pub variants: Vec<Variant>,
    pub review_status: String,
    pub image_url: String,
}

/// Errors surfaced by a [`BeatmapLookup`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Metadata provider unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// Source of beatmap metadata.
///
/// Returns every difficulty of the set in provider order. An unknown id is
/// an empty vector, not an error.
#[async_trait]
pub trait BeatmapLookup: Send + Sync {
    async fn lookup_set(&self, beatmapset_id: DbId) -> Result<Vec<RawBeatmap>, LookupError>;
}

/// Build the cover image URL for a beatmapset.
pub fn cover_image_url(beatmapset_id: DbId) -> String {
    COVER_URL_TEMPLATE.replace("{set_id}", &beatmapset_id.to_string())
}

/// Format a length in seconds as `M:SS`.
pub fn format_length(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

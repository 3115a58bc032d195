//! Conversion of provider metadata into a [`SubmissionCandidate`].

use crate::beatmap::{cover_image_url, format_length, RawBeatmap, SubmissionCandidate, Variant};
use crate::rounding::round2;

/// Reason reported when the provider has nothing for the requested id.
pub const INVALID_SOURCE_ID_REASON: &str = "Invalid beatmap ID";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid beatmap ID")]
    InvalidSourceId,
}

/// Build a candidate from every difficulty of one beatmapset.
///
/// Set-level fields come from the first difficulty. Variants are sorted by
/// rounded star rating; the sort is stable so equal ratings keep provider
/// order.
pub fn normalize(
    lookup: &[RawBeatmap],
    comment: Option<&str>,
    cross_mod: Option<bool>,
) -> Result<SubmissionCandidate, NormalizeError> {
    let first = lookup.first().ok_or(NormalizeError::InvalidSourceId)?;

    let mut variants: Vec<Variant> = lookup
        .iter()
        .map(|map| Variant {
            name: map.version.clone(),
            category: map.mode.clone(),
            difficulty_rating: round2(map.difficulty_rating),
        })
        .collect();
    variants.sort_by(|a, b| a.difficulty_rating.total_cmp(&b.difficulty_rating));

    Ok(SubmissionCandidate {
        beatmapset_id: first.beatmapset_id,
        title: first.title.clone(),
        artist: first.artist.clone(),
        creator: first.creator.clone(),
        bpm: first.bpm,
        length: format_length(first.total_length),
        comment: comment.unwrap_or_default().to_string(),
        cross_mod: cross_mod.unwrap_or(false),
        variants,
        review_status: first.status.clone(),
        image_url: cover_image_url(first.beatmapset_id),
    })
}

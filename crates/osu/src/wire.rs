//! Wire format of `get_beatmaps` and its mapping to [`RawBeatmap`].
//!
//! The v1 API encodes every field, numeric ones included, as a JSON string.

use serde::Deserialize;

use modqueue_core::beatmap::RawBeatmap;
use modqueue_core::queue::{CATEGORY_CATCH, CATEGORY_MANIA, CATEGORY_OSU, CATEGORY_TAIKO};

/// One element of the `get_beatmaps` response array.
#[derive(Debug, Clone, Deserialize)]
pub struct WireBeatmap {
    pub beatmapset_id: String,
    pub approved: String,
    pub total_length: String,
    pub version: String,
    pub artist: String,
    pub title: String,
    pub creator: String,
    pub bpm: Option<String>,
    pub mode: String,
    pub difficultyrating: String,
}

/// A field that could not be decoded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("field '{field}' has unexpected value '{value}'")]
pub struct WireError {
    pub field: &'static str,
    pub value: String,
}

/// Ranked status label for an `approved` code.
pub fn status_label(approved: i32) -> Option<&'static str> {
    match approved {
        -2 => Some("Graveyard"),
        -1 => Some("WIP"),
        0 => Some("Pending"),
        1 => Some("Ranked"),
        2 => Some("Approved"),
        3 => Some("Qualified"),
        4 => Some("Loved"),
        _ => None,
    }
}

/// Category label for a `mode` code.
pub fn mode_label(mode: i32) -> Option<&'static str> {
    match mode {
        0 => Some(CATEGORY_OSU),
        1 => Some(CATEGORY_TAIKO),
        2 => Some(CATEGORY_CATCH),
        3 => Some(CATEGORY_MANIA),
        _ => None,
    }
}

fn parse<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, WireError> {
    value.trim().parse().map_err(|_| WireError {
        field,
        value: value.to_string(),
    })
}

fn label(
    field: &'static str,
    value: &str,
    lookup: fn(i32) -> Option<&'static str>,
) -> Result<String, WireError> {
    let code = parse::<i32>(field, value)?;
    lookup(code).map(str::to_string).ok_or_else(|| WireError {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<WireBeatmap> for RawBeatmap {
    type Error = WireError;

    fn try_from(wire: WireBeatmap) -> Result<Self, Self::Error> {
        let bpm = match wire.bpm.as_deref() {
            Some(raw) => parse("bpm", raw)?,
            None => 0.0,
        };

        Ok(RawBeatmap {
            beatmapset_id: parse("beatmapset_id", &wire.beatmapset_id)?,
            total_length: parse("total_length", &wire.total_length)?,
            difficulty_rating: parse("difficultyrating", &wire.difficultyrating)?,
            status: label("approved", &wire.approved, status_label)?,
            mode: label("mode", &wire.mode, mode_label)?,
            bpm,
            title: wire.title,
            artist: wire.artist,
            creator: wire.creator,
            version: wire.version,
        })
    }
}

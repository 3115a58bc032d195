//! Client for the osu! v1 web API.
//!
//! Only the `get_beatmaps` endpoint is used: it returns every difficulty of
//! a beatmapset, which [`api::OsuApi`] decodes into
//! [`modqueue_core::beatmap::RawBeatmap`] values for the normalizer.

pub mod api;
pub mod wire;

pub use api::{OsuApi, OsuApiError};

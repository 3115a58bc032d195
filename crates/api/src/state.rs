use std::sync::Arc;

use modqueue_core::beatmap::BeatmapLookup;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: modqueue_db::DbPool,
    /// Server configuration (JWT secret, osu! credentials, timeouts).
    pub config: Arc<ServerConfig>,
    /// Beatmap metadata source (the osu! API in production, a stub in tests).
    pub beatmaps: Arc<dyn BeatmapLookup>,
}

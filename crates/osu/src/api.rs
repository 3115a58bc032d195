//! HTTP client for the osu! v1 `get_beatmaps` endpoint.

use async_trait::async_trait;

use modqueue_core::beatmap::{BeatmapLookup, LookupError, RawBeatmap};
use modqueue_core::types::DbId;

use crate::wire::{WireBeatmap, WireError};

/// Default base URL of the v1 API.
pub const DEFAULT_BASE_URL: &str = "https://osu.ppy.sh/api";

/// HTTP client for the osu! v1 API.
pub struct OsuApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the osu! API layer.
#[derive(Debug, thiserror::Error)]
pub enum OsuApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    ///
    /// The URL is stripped before this is built.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("osu! API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A beatmap in the response could not be decoded.
    #[error("Malformed beatmap: {0}")]
    Wire(#[from] WireError),
}

impl From<OsuApiError> for LookupError {
    fn from(err: OsuApiError) -> Self {
        match err {
            OsuApiError::Wire(e) => LookupError::Malformed(e.to_string()),
            other => LookupError::Unavailable(other.to_string()),
        }
    }
}

impl OsuApi {
    /// Create a client for the given base URL and API key.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetch every difficulty of a beatmapset.
    ///
    /// An unknown set id yields an empty vector; the API answers `[]` rather
    /// than an error status.
    pub async fn get_beatmapset(&self, beatmapset_id: DbId) -> Result<Vec<RawBeatmap>, OsuApiError> {
        let set_id = beatmapset_id.to_string();
        let response = self
            .client
            .get(format!("{}/get_beatmaps", self.base_url.trim_end_matches('/')))
            .query(&[("k", self.api_key.as_str()), ("s", set_id.as_str())])
            .send()
            .await
            .map_err(redact)?;

        let response = Self::ensure_success(response).await?;
        let wire: Vec<WireBeatmap> = response.json().await.map_err(redact)?;

        tracing::debug!(beatmapset_id, difficulties = wire.len(), "Fetched beatmapset");

        wire.into_iter()
            .map(|map| RawBeatmap::try_from(map).map_err(OsuApiError::from))
            .collect()
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`OsuApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, OsuApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OsuApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Strip the request URL from a transport error; it carries the API key.
fn redact(err: reqwest::Error) -> OsuApiError {
    OsuApiError::Request(err.without_url())
}

#[async_trait]
impl BeatmapLookup for OsuApi {
    async fn lookup_set(&self, beatmapset_id: DbId) -> Result<Vec<RawBeatmap>, LookupError> {
        Ok(self.get_beatmapset(beatmapset_id).await?)
    }
}

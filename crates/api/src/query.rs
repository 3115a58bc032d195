//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for queue request listings (`?archived=&limit=&offset=`).
///
/// Limits are clamped in the repository layer.
#[derive(Debug, Deserialize)]
pub struct RequestListParams {
    pub archived: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

//! Route definitions for the `/requests` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::request;
use crate::state::AppState;

/// Routes mounted at `/requests`.
///
/// ```text
/// GET    /mine    -> list_my_requests
/// PUT    /{id}    -> moderate_request
/// DELETE /{id}    -> delete_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mine", get(request::list_my_requests))
        .route(
            "/{id}",
            put(request::moderate_request).delete(request::delete_request),
        )
}

//! Route definitions for the `/queues` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{queue, request};
use crate::state::AppState;

/// Routes mounted at `/queues`.
///
/// ```text
/// GET    /                       -> list_queues
/// PUT    /me                     -> upsert_my_queue
/// GET    /{owner_id}             -> get_queue
/// GET    /{owner_id}/requests    -> list_queue_requests
/// POST   /{owner_id}/requests    -> submit_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(queue::list_queues))
        .route("/me", put(queue::upsert_my_queue))
        .route("/{owner_id}", get(queue::get_queue))
        .route(
            "/{owner_id}/requests",
            get(request::list_queue_requests).post(request::submit_request),
        )
}

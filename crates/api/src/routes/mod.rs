pub mod health;
pub mod queue;
pub mod request;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /queues                              list (public)
/// /queues/me                           upsert own settings (PUT, auth)
/// /queues/{owner_id}                   get one queue (public)
/// /queues/{owner_id}/requests          list (public), submit (POST, auth)
///
/// /requests/mine                       caller's submissions (auth)
/// /requests/{id}                       moderate (PUT, owner), delete (submitter)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/queues", queue::router())
        .nest("/requests", request::router())
}

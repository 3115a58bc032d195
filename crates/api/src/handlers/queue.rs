//! Handlers for the `/queues` resource.

use axum::extract::{Path, State};
use axum::Json;
use modqueue_core::error::CoreError;
use modqueue_core::types::DbId;
use modqueue_db::models::queue::{Queue, UpsertQueue};
use modqueue_db::repositories::{QueueRepo, RequestRepo};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A queue's settings together with its current load.
#[derive(Debug, Serialize)]
pub struct QueueDetail {
    #[serde(flatten)]
    pub queue: Queue,
    pub pending_count: i64,
}

/// GET /api/v1/queues
pub async fn list_queues(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Queue>>>> {
    let queues = QueueRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: queues }))
}

/// GET /api/v1/queues/{owner_id}
pub async fn get_queue(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
) -> AppResult<Json<DataResponse<QueueDetail>>> {
    let (queue, pending_count) = tokio::try_join!(
        QueueRepo::find_by_owner(&state.pool, owner_id),
        RequestRepo::count_pending(&state.pool, owner_id),
    )?;
    let queue = queue.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Queue",
        id: owner_id,
    }))?;

    Ok(Json(DataResponse {
        data: QueueDetail {
            queue,
            pending_count,
        },
    }))
}

/// PUT /api/v1/queues/me
///
/// Creates the caller's queue on first use, replaces its settings afterwards.
pub async fn upsert_my_queue(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertQueue>,
) -> AppResult<Json<DataResponse<Queue>>> {
    input.validate()?;

    let queue = QueueRepo::upsert(&state.pool, auth.user_id, &auth.username, &input).await?;
    tracing::info!(
        owner_id = auth.user_id,
        open = queue.open,
        max_pending = queue.max_pending,
        "Queue settings saved"
    );
    Ok(Json(DataResponse { data: queue }))
}

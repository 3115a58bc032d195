//! Handlers for request submission, listing and moderation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use modqueue_core::admission::AdmissionDecision;
use modqueue_core::error::CoreError;
use modqueue_core::moderation::validate_status;
use modqueue_core::normalize::normalize;
use modqueue_core::types::DbId;
use modqueue_db::models::request::{Request, UpdateRequest};
use modqueue_db::repositories::{AdmissionOutcome, AdmissionRepo, QueueRepo, RequestRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::RequestListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of a submission.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Beatmapset id on osu!.
    pub beatmap_id: DbId,
    pub comment: Option<String>,
    pub cross_mod: Option<bool>,
}

/// Payload returned when a submission is stored.
#[derive(Debug, Serialize)]
pub struct AcceptedRequest {
    pub request: Request,
    /// Set when this submission filled the queue.
    pub queue_closed: bool,
}

fn queue_not_found(owner_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Queue",
        id: owner_id,
    })
}

fn request_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Request",
        id,
    })
}

/// POST /api/v1/queues/{owner_id}/requests
///
/// Returns 201 with the stored request on acceptance. A rejection is not an
/// error: it comes back as 200 with the candidate and every failed rule.
pub async fn submit_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<Response> {
    let (queue, lookup) = tokio::join!(
        QueueRepo::find_by_owner(&state.pool, owner_id),
        state.beatmaps.lookup_set(input.beatmap_id),
    );
    if queue?.is_none() {
        return Err(queue_not_found(owner_id));
    }

    let beatmaps = lookup.unwrap_or_else(|e| {
        tracing::warn!(
            beatmapset_id = input.beatmap_id,
            error = %e,
            "Beatmap lookup failed, treating id as invalid"
        );
        Vec::new()
    });

    let candidate = match normalize(&beatmaps, input.comment.as_deref(), input.cross_mod) {
        Ok(candidate) => candidate,
        Err(_) => {
            let decision = AdmissionDecision::invalid_source();
            return Ok(Json(DataResponse { data: decision }).into_response());
        }
    };

    let outcome = AdmissionRepo::admit(&state.pool, &auth.requester(), owner_id, candidate, Utc::now())
        .await?
        .ok_or_else(|| queue_not_found(owner_id))?;

    match outcome {
        AdmissionOutcome::Accepted {
            request,
            queue_closed,
        } => {
            tracing::info!(
                request_id = request.id,
                owner_id,
                user_id = auth.user_id,
                beatmapset_id = request.beatmapset_id,
                "Request accepted"
            );
            let body = DataResponse {
                data: AcceptedRequest {
                    request,
                    queue_closed,
                },
            };
            Ok((StatusCode::CREATED, Json(body)).into_response())
        }
        AdmissionOutcome::Rejected(decision) => {
            tracing::debug!(
                owner_id,
                user_id = auth.user_id,
                reasons = ?decision.reasons,
                "Request rejected"
            );
            Ok(Json(DataResponse { data: decision }).into_response())
        }
    }
}

/// GET /api/v1/queues/{owner_id}/requests
pub async fn list_queue_requests(
    State(state): State<AppState>,
    Path(owner_id): Path<DbId>,
    Query(params): Query<RequestListParams>,
) -> AppResult<Json<DataResponse<Vec<Request>>>> {
    let requests = RequestRepo::list_for_owner(
        &state.pool,
        owner_id,
        params.archived,
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/requests/mine
pub async fn list_my_requests(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Request>>>> {
    let requests = RequestRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// PUT /api/v1/requests/{id}
///
/// Only the owner of the queue the request sits in may moderate it.
pub async fn moderate_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequest>,
) -> AppResult<Json<DataResponse<Request>>> {
    let existing = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| request_not_found(id))?;
    if existing.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the queue owner can moderate this request".into(),
        )));
    }

    input.validate()?;
    if let Some(status) = &input.status {
        validate_status(status).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let updated = RequestRepo::update_moderation(&state.pool, id, &input)
        .await?
        .ok_or_else(|| request_not_found(id))?;
    tracing::info!(
        request_id = id,
        owner_id = auth.user_id,
        status = %updated.status,
        archived = updated.archived,
        freed_slot = existing.counts_toward_capacity() && !updated.counts_toward_capacity(),
        "Request moderated"
    );
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/requests/{id}
pub async fn delete_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| request_not_found(id))?;
    if existing.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the submitter can delete this request".into(),
        )));
    }

    if RequestRepo::delete_for_user(&state.pool, id, auth.user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(request_not_found(id))
    }
}

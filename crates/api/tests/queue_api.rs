//! HTTP-level integration tests for queue settings endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_queue, get, osu_queue, put_json, put_json_auth, submit,
    token_for, MAPPER_ID, MAPPER_NAME, OWNER_ID, OWNER_NAME, PENDING_OSU_SET,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_creates_queue_for_caller(pool: PgPool) {
    let json = create_queue(&pool, osu_queue(10, 7.0)).await;

    assert_eq!(json["data"]["owner_id"], OWNER_ID);
    assert_eq!(json["data"]["owner_name"], OWNER_NAME);
    assert_eq!(json["data"]["moderator_tier"], "full");
    assert_eq!(json["data"]["accepted_categories"], serde_json::json!(["osu"]));
    assert_eq!(json["data"]["open"], true);
    assert_eq!(json["data"]["max_pending"], 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_replaces_existing_settings(pool: PgPool) {
    create_queue(&pool, osu_queue(10, 7.0)).await;
    let json = create_queue(
        &pool,
        serde_json::json!({
            "moderator_tier": "plain",
            "accepted_categories": ["taiko", "mania"],
            "open": false,
            "cooldown_days": 0.5,
            "max_pending": 3
        }),
    )
    .await;

    assert_eq!(json["data"]["moderator_tier"], "plain");
    assert_eq!(json["data"]["open"], false);
    assert_eq!(json["data"]["cooldown_days"], 0.5);

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/queues").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_requires_auth(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(app, "/api/v1/queues/me", osu_queue(10, 0.0)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_rejects_unknown_category(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/queues/me",
        serde_json::json!({
            "moderator_tier": "full",
            "accepted_categories": ["ctb"],
            "cooldown_days": 0,
            "max_pending": 5
        }),
        &token_for(OWNER_ID, OWNER_NAME),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_rejects_zero_capacity(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/queues/me",
        osu_queue(0, 0.0),
        &token_for(OWNER_ID, OWNER_NAME),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_queue_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/queues/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_queue_reports_pending_count(pool: PgPool) {
    create_queue(&pool, osu_queue(10, 0.0)).await;
    let response = submit(
        &pool,
        MAPPER_ID,
        MAPPER_NAME,
        serde_json::json!({ "beatmap_id": PENDING_OSU_SET }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/queues/{OWNER_ID}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["owner_id"], OWNER_ID);
    assert_eq!(json["data"]["pending_count"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_puts_open_queues_first(pool: PgPool) {
    create_queue(&pool, osu_queue(10, 0.0)).await;

    let closed = serde_json::json!({
        "moderator_tier": "plain",
        "accepted_categories": ["osu"],
        "open": false,
        "cooldown_days": 0,
        "max_pending": 5
    });
    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/queues/me",
        closed,
        &token_for(MAPPER_ID, "aaa-first-by-name"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/queues").await).await;
    let queues = json["data"].as_array().unwrap();
    assert_eq!(queues.len(), 2);
    assert_eq!(queues[0]["owner_id"], OWNER_ID);
    assert_eq!(queues[1]["open"], false);
}

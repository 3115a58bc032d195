#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use modqueue_api::auth::jwt::{generate_access_token, JwtConfig};
use modqueue_api::config::{OsuConfig, ServerConfig};
use modqueue_api::router::build_app_router;
use modqueue_api::state::AppState;
use modqueue_core::beatmap::{BeatmapLookup, LookupError, RawBeatmap};
use modqueue_core::types::DbId;

pub const OWNER_ID: DbId = 1;
pub const OWNER_NAME: &str = "owner";
pub const MAPPER_ID: DbId = 2;
pub const MAPPER_NAME: &str = "mapper";
pub const OTHER_ID: DbId = 3;
pub const OTHER_NAME: &str = "someone";

/// Pending osu! set created by [`MAPPER_NAME`], two difficulties.
pub const PENDING_OSU_SET: DbId = 100;
/// Ranked taiko set created by [`MAPPER_NAME`].
pub const RANKED_TAIKO_SET: DbId = 200;
/// Pending osu! set created by [`OTHER_NAME`].
pub const OTHER_PENDING_SET: DbId = 300;
/// Lookups for this id fail as if the provider were down.
pub const UNAVAILABLE_SET: DbId = 666;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
        osu: OsuConfig {
            api_key: "unused".to_string(),
            base_url: "http://127.0.0.1:0".to_string(),
        },
    }
}

/// In-memory beatmap source keyed by beatmapset id.
pub struct StubBeatmaps {
    sets: HashMap<DbId, Vec<RawBeatmap>>,
}

impl StubBeatmaps {
    pub fn new() -> Self {
        let mut sets = HashMap::new();
        sets.insert(
            PENDING_OSU_SET,
            vec![
                raw(PENDING_OSU_SET, MAPPER_NAME, "Pending", "Insane", "osu", 4.87),
                raw(PENDING_OSU_SET, MAPPER_NAME, "Pending", "Normal", "osu", 2.1),
            ],
        );
        sets.insert(
            RANKED_TAIKO_SET,
            vec![raw(RANKED_TAIKO_SET, MAPPER_NAME, "Ranked", "Oni", "taiko", 5.2)],
        );
        sets.insert(
            OTHER_PENDING_SET,
            vec![raw(OTHER_PENDING_SET, OTHER_NAME, "Pending", "Hard", "osu", 3.33)],
        );
        Self { sets }
    }
}

#[async_trait]
impl BeatmapLookup for StubBeatmaps {
    async fn lookup_set(&self, beatmapset_id: DbId) -> Result<Vec<RawBeatmap>, LookupError> {
        if beatmapset_id == UNAVAILABLE_SET {
            return Err(LookupError::Unavailable("connection refused".to_string()));
        }
        Ok(self.sets.get(&beatmapset_id).cloned().unwrap_or_default())
    }
}

fn raw(
    beatmapset_id: DbId,
    creator: &str,
    status: &str,
    version: &str,
    mode: &str,
    rating: f64,
) -> RawBeatmap {
    RawBeatmap {
        beatmapset_id,
        title: format!("Set {beatmapset_id}"),
        artist: "Artist".to_string(),
        creator: creator.to_string(),
        bpm: 180.0,
        total_length: 125,
        status: status.to_string(),
        version: version.to_string(),
        mode: mode.to_string(),
        difficulty_rating: rating,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the stub beatmap source.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        beatmaps: Arc::new(StubBeatmaps::new()),
    };
    build_app_router(state, &config)
}

/// Issue an access token for the given user, signed with the test secret.
pub fn token_for(user_id: DbId, username: &str) -> String {
    generate_access_token(user_id, username, &test_config().jwt).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Create the test owner's queue with the given settings.
pub async fn create_queue(pool: &PgPool, settings: serde_json::Value) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/queues/me",
        settings,
        &token_for(OWNER_ID, OWNER_NAME),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}

/// An open, full-tier osu! queue with no cooldown and room for `max_pending`.
pub fn osu_queue(max_pending: i32, cooldown_days: f64) -> serde_json::Value {
    serde_json::json!({
        "moderator_tier": "full",
        "accepted_categories": ["osu"],
        "open": true,
        "cooldown_days": cooldown_days,
        "max_pending": max_pending
    })
}

/// Submit `beatmap_id` to the test owner's queue as the given user.
pub async fn submit(
    pool: &PgPool,
    user_id: DbId,
    username: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let app = build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/v1/queues/{OWNER_ID}/requests"),
        body,
        &token_for(user_id, username),
    )
    .await
}

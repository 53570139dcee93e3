//! # Auth Handler Tests
//!
//! Test suite for the registration and login handlers, driven through the
//! real router with an in-memory SQLite store.


use crate::server::{create_router, AppState};
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use lib_core::{Config, DbPool};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Setup an in-memory test database with the schema applied.
///
/// A single persistent connection: every pooled connection to `:memory:`
/// would otherwise see its own empty database.
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    lib_core::init_db(&pool)
        .await
        .expect("Failed to create users table");

    pool
}

/// Create test config.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 24,
        dev_mode: false,
    }
}

/// Create the real application router over the given pool and config.
pub fn test_app(pool: DbPool, config: Config) -> Router {
    create_router(AppState { db: pool, config }, Vec::new())
}

/// POST a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// GET a URI, optionally with a bearer token.
pub async fn get_with_auth(app: Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).expect("request should build"))
        .await
        .expect("request should not fail at the transport level")
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be collectable")
        .to_vec()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be valid JSON")
}

#![allow(dead_code)]

//! Test infrastructure for um-server API tests

use um_db::UserRepository;
use um_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    // One connection: every :memory: connection is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    um_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(UserRepository::new(create_test_pool().await))
}

/// AppState plus its pool, for tests that tamper with the schema
pub async fn create_test_app_state_with_pool() -> (AppState, SqlitePool) {
    let pool = create_test_pool().await;
    (AppState::new(UserRepository::new(pool.clone())), pool)
}

/// Simulates a concurrent writer: right before every `event` (INSERT or
/// UPDATE) on `users`, another row claiming the same email is inserted, so
/// the statement trips the unique index after the handler's pre-check passed.
pub async fn install_email_race_trigger(pool: &SqlitePool, event: &str) {
    let sql = format!(
        r#"
            CREATE TRIGGER race_before_{name} BEFORE {event} ON users
            BEGIN
                INSERT INTO users (first_name, last_name, email)
                VALUES ('Racer', 'Racer', NEW.email);
            END
        "#,
        name = event.to_lowercase(),
    );

    sqlx::query(&sql)
        .execute(pool)
        .await
        .expect("Failed to install race trigger");
}

pub fn create_test_app(state: AppState) -> Router {
    build_router(state, HeaderValue::from_static(TEST_ORIGIN))
}

/// Send one request through a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a user through the API and return its JSON
pub async fn create_test_user(
    app: &Router,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> serde_json::Value {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/users",
            serde_json::json!({
                "firstName": first_name,
                "lastName": last_name,
                "email": email,
            }),
        ),
    )
    .await;

    assert_eq!(response.status(), 201);
    body_json(response).await
}

use crate::{AppState, build_router};

use um_db::UserRepository;

use std::sync::{Mutex, Once};

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, StatusCode},
};
use log::{LevelFilter, Log, Metadata, Record};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Keeps every formatted message; shared by all tests in this binary
struct CaptureLogger;

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

fn install_capture_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();
    um_db::MIGRATOR.run(&pool).await.unwrap();

    build_router(
        AppState::new(UserRepository::new(pool)),
        HeaderValue::from_static("http://localhost:3000"),
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> StatusCode {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_user_handlers_log_ids_but_not_emails() {
    install_capture_logger();
    let app = test_app().await;

    let created = send(
        &app,
        "POST",
        "/api/users",
        Some(serde_json::json!({
            "firstName": "Quiet",
            "lastName": "Person",
            "email": "quiet.person@example.com",
        })),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);

    let updated = send(
        &app,
        "PUT",
        "/api/users/1",
        Some(serde_json::json!({
            "firstName": "Quiet",
            "lastName": "Person",
            "email": "still.quiet@example.com",
        })),
    )
    .await;
    assert_eq!(updated, StatusCode::OK);

    let missed = send(
        &app,
        "GET",
        "/api/users/search?firstName=Nobody&email=hidden.person%40example.com",
        None,
    )
    .await;
    assert_eq!(missed, StatusCode::NOT_FOUND);

    let records = RECORDS.lock().unwrap();
    assert!(records.iter().any(|r| r.contains("Created user 1")));
    assert!(records.iter().any(|r| r.contains("Updated user 1")));
    for email in ["quiet.person", "still.quiet", "hidden.person"] {
        assert!(
            records.iter().all(|r| !r.contains(email)),
            "log leaked {}",
            email
        );
    }
}

use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - reports whether the database answers
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, summary, database) = match state.users.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "ok"),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "unavailable")
        }
    };

    let health = json!({
        "status": summary,
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

use crate::{
    AppState, create_user, get_user, health, list_users, request_logging, search_users,
    update_user,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints.
///
/// `allowed_origin` is the single front-end origin granted CORS access.
pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        // User endpoints
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/search", get(search_users))
        .route("/api/users/{id}", get(get_user).put(update_user))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Add shared state
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::CONTENT_TYPE]),
        )
}

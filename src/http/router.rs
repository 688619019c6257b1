//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Student CRUD endpoints
    let students = Router::new()
        .route("/students", post(handlers::register_student))
        .route("/students", get(handlers::list_students))
        .route("/students/{roll_no}", put(handlers::update_contact_number))
        .route("/students/{roll_no}", delete(handlers::remove_student));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", students)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

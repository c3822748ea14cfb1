use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Direct report generation from a raw conversation payload
        .route("/api/generateReport", post(handlers::generate_report))
        // Session lifecycle
        .route("/api/sessions", post(handlers::create_session))
        .route(
            "/api/sessions/:session_id/messages",
            post(handlers::append_message),
        )
        .route(
            "/api/sessions/:session_id/transcript",
            get(handlers::get_transcript),
        )
        .route(
            "/api/sessions/:session_id/report",
            post(handlers::export_session_report),
        )
        // The session UI runs in a browser on a different origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Router construction.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use log::debug;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::state::SharedState;

/// Build the API router. No authentication, no rate limiting, no versioning;
/// the only consumer is the tool's own browser UI.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/generate", post(handlers::generate))
        .route("/api/record-email", post(handlers::record_email))
        .layer(axum::middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log every request method and path.
async fn log_request(request: Request, next: Next) -> Response {
    debug!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

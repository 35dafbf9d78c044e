//! API Routes
//!
//! Configures the Axum router with all document cache endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    blob_handler, clear_handler, get_handler, health_handler, list_handler, remove_handler,
    stats_handler, upload_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /documents/:key` - Cache a document and get its viewer URL
/// - `GET /documents/:key` - Look up a cached document's URL
/// - `DELETE /documents/:key` - Release one document
/// - `GET /documents` - List cached documents by recency
/// - `DELETE /documents` - Release every document
/// - `GET /blobs/:id` - Serve the bytes behind an object URL
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit: raised to the configured upload limit
/// - CORS: Allows any origin so embedded viewers can load blobs
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/documents", get(list_handler).delete(clear_handler))
        .route(
            "/documents/:key",
            put(upload_handler).get(get_handler).delete(remove_handler),
        )
        .route("/blobs/:id", get(blob_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

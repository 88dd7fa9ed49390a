//! HTTP API module
//!
//! A single catch-all handler logs every request and answers 200 OK.

pub mod handlers;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use handlers::{log_request_handler, RequestLogger};

/// Create the HTTP router: every method and path reaches the request logger
pub fn create_router(logger: RequestLogger) -> Router {
    Router::new()
        .fallback(log_request_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(logger)
}

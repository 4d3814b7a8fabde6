//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`        - Create a short link
//! - `GET  /list`           - List every link
//! - `GET  /resolve`        - Resolve a code without redirecting
//! - `GET  /qrcode/{code}`  - QR image payload
//! - `GET  /health`         - Health check
//! - `GET  /{code}`         - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with state and tracing applied.
pub fn build_router(state: AppState) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

//! API route configuration.

use crate::api::handlers::{
    health_handler, list_handler, qrcode_handler, redirect_handler, resolve_handler,
    shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create a short link
/// - `GET  /list`             - List every link
/// - `GET  /resolve`          - Resolve a code without redirecting
/// - `GET  /qrcode/{code}`    - QR image payload of a link
/// - `GET  /health`           - Storage health check
/// - `GET  /{code}`           - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/list", get(list_handler))
        .route("/resolve", get(resolve_handler))
        .route("/qrcode/{code}", get(qrcode_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}

//! Handler for scannable image retrieval.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Returns the QR image payload of a link as raw bytes.
///
/// # Endpoint
///
/// `GET /qrcode/{code}`
///
/// The body is the stored payload, served as `application/octet-stream`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn qrcode_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let payload = state.link_service.fetch_image(&code).await?;

    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], payload))
}

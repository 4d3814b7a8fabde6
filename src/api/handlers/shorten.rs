//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com", "custom_code": "promo1" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_code": "PROMO1", "link": "http://localhost:3000/PROMO1" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is empty or the custom code is rejected.
/// Returns 409 Conflict if the custom code already exists.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .shorten(payload.long_url, payload.custom_code)
        .await?;

    let link_url = state
        .link_service
        .get_short_url(&state.base_url, &link.short_code);

    Ok(Json(ShortenResponse {
        short_code: link.short_code,
        link: link_url,
    }))
}

//! Handlers for link lookup and listing.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::links::{LinkListItem, ResolveQuery, ResolveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /list`
///
/// # Response
///
/// ```json
/// [ { "short_code": "ABC123", "long_url": "https://example.com" } ]
/// ```
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkListItem>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkListItem::from).collect()))
}

/// Resolves a short code without redirecting.
///
/// # Endpoint
///
/// `GET /resolve?short_code=ABC123`
///
/// # Errors
///
/// Returns 400 Bad Request if `short_code` is missing or empty.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, AppError> {
    let code = query
        .short_code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| {
            AppError::bad_request(
                "Missing short code parameter",
                json!({ "parameter": "short_code" }),
            )
        })?;

    let link = state.link_service.resolve(&code).await?;

    Ok(Json(ResolveResponse {
        success: true,
        short_code: link.short_code,
        long_url: link.long_url,
    }))
}

//! DTOs for link lookup and listing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::LinkSummary;

/// Query string for `GET /resolve`.
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub short_code: Option<String>,
}

/// Successful resolve response.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub success: bool,
    pub short_code: String,
    pub long_url: String,
}

/// One entry of `GET /list`.
#[derive(Debug, Serialize)]
pub struct LinkListItem {
    pub short_code: String,
    pub long_url: String,
}

impl From<LinkSummary> for LinkListItem {
    fn from(summary: LinkSummary) -> Self {
        Self {
            short_code: summary.short_code,
            long_url: summary.long_url,
        }
    }
}

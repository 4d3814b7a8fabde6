//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// `customize_code` is accepted as an alias of `custom_code`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL, stored as given.
    #[validate(length(min = 1, message = "long_url must not be empty"))]
    pub long_url: String,

    /// Optional custom short code. Empty means absent.
    #[serde(default, alias = "customize_code")]
    #[validate(length(max = 64))]
    pub custom_code: Option<String>,
}

/// Successful shorten response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    /// Full public short link.
    pub link: String,
}

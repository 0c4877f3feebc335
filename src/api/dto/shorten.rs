//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// `original_url` is optional at the type level so that a missing field
/// reaches the service and produces the "Missing URL" error.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Response carrying the fully qualified short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

//! DTOs for link statistics.

use serde::Serialize;

use crate::domain::entities::ShortLink;

/// Destination and click count of a short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub clicks: i32,
}

impl From<ShortLink> for StatsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            clicks: link.clicks,
        }
    }
}

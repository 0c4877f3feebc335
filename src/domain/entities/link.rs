//! ShortLink entity representing a shortened URL mapping.

/// A stored mapping from a short code to its destination URL.
///
/// Created once by the shorten operation; afterwards only `clicks` changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i32,
    pub short_code: String,
    pub original_url: String,
    pub clicks: i32,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i32, short_code: String, original_url: String, clicks: i32) -> Self {
        Self {
            id,
            short_code,
            original_url,
            clicks,
        }
    }
}

/// Input data for creating a new link. Clicks always start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub short_code: String,
    pub original_url: String,
}

/// Aggregate counters over every stored link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkTotals {
    pub links: i64,
    pub clicks: i64,
}

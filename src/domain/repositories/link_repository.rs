//! Repository trait for short link data access.

use crate::domain::entities::{LinkTotals, NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Every method acquires storage for the duration of a single statement.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already stored.
    /// Returns [`AppError::Unavailable`] if storage cannot be reached.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Returns true if a link with this code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Increments the click counter and returns the updated link.
    ///
    /// Lookup and increment are a single atomic step. Returns `Ok(None)`
    /// when no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    async fn record_click(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Counts links and sums their clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    async fn totals(&self) -> Result<LinkTotals, AppError>;

    /// Lists the most clicked links, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage errors.
    async fn top(&self, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Checks that storage answers a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if storage cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}

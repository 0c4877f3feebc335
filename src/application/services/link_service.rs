//! Link creation, redirect resolution and statistics.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved, is_valid_code};
use crate::utils::url_normalizer::{UrlError, prepare_url};

/// Default bound on code generation attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving shortened links.
///
/// Composes the code generator and a [`LinkRepository`]. Holds no mutable
/// state, so one instance is shared by all requests.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    base_url: String,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// Trailing slashes are trimmed from `base_url`. `max_attempts` is
    /// clamped to at least one.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<String>,
        max_attempts: usize,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a short link for a user-supplied URL.
    ///
    /// Scheme-less input is stored with `https://` prepended.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingUrl`] if `original_url` is `None` or empty
    /// - [`AppError::InvalidUrl`] if the prefixed URL fails validation
    /// - [`AppError::GenerationExhausted`] if no free code was found
    /// - [`AppError::Conflict`] if a concurrent insert took the code first
    /// - [`AppError::Unavailable`] if storage cannot be reached
    pub async fn shorten(&self, original_url: Option<&str>) -> Result<ShortLink, AppError> {
        let original_url = match original_url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(AppError::MissingUrl),
        };

        let original_url = prepare_url(original_url).map_err(|e| match e {
            UrlError::Empty => AppError::MissingUrl,
            _ => AppError::InvalidUrl,
        })?;

        let short_code = self.generate_unique_code().await?;

        let link = self
            .link_repository
            .create(NewShortLink {
                short_code,
                original_url,
            })
            .await?;

        tracing::info!(code = %link.short_code, url = %link.original_url, "Short link created");

        Ok(link)
    }

    /// Resolves a short code for a redirect and counts the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn follow(&self, code: &str) -> Result<ShortLink, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::NotFound);
        }

        self.link_repository
            .record_click(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Returns the stored link without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn stats(&self, code: &str) -> Result<ShortLink, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::NotFound);
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Checks storage connectivity.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn health(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generates a code not yet present in storage.
    ///
    /// Reserved codes count as an attempt and are skipped.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code();

            if is_reserved(&code) {
                continue;
            }

            if !self.link_repository.code_exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "Short code collision");
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "Gave up generating a unique short code"
        );

        Err(AppError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

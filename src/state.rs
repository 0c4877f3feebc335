//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State cloned into every request.
///
/// Immutable after startup; all mutable data lives in PostgreSQL.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates the state from a ready link service.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}

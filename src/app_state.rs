//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::BookService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Book service for all catalog operations.
    pub book_service: Arc<BookService>,
}

impl AppState {
    /// Wraps a service into shareable state.
    #[must_use]
    pub fn new(book_service: BookService) -> Self {
        Self {
            book_service: Arc::new(book_service),
        }
    }
}

//! Error types for verse resolution.

use thiserror::Error;
use versicle_citation::CitationError;

/// A verse store query failed (connection lost, corpus missing, ...).
///
/// The engine never retries; this surfaces immediately so the caller can
/// decide on a retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("verse store unavailable: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while resolving markers against a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The citation's book name matched nothing in the store.
    #[error("book '{name}' is not in the verse store")]
    BookNotFound { name: String },

    /// An exactly named verse has no row in the store.
    #[error("verse {chapter}:{verse} of book {book_id} is not in the verse store")]
    VerseNotFound {
        book_id: u32,
        chapter: u32,
        verse: u32,
    },

    /// Every marker legitimately resolved to zero rows.
    #[error("citation against book {book_id} resolved to no verses")]
    EmptyResult { book_id: u32 },

    /// The store itself failed.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

/// Errors surfaced by the scripture/confession service fronts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Citation(#[from] CitationError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The requested format identifier has no registered transform.
    #[error("no formatter registered under '{name}'")]
    UnknownFormat { name: String },
}

/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

//! Error types for citation parsing.

use thiserror::Error;

/// Result type alias for citation parsing operations.
pub type Result<T> = std::result::Result<T, CitationError>;

/// Errors that can occur while parsing a citation string.
///
/// Parse errors are terminal for the citation being processed; no partial
/// request list is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    /// A comma-separated segment matches none of the grammar rules.
    #[error("segment '{segment}' is not a valid chapter/verse reference")]
    MalformedSegment { segment: String },

    /// A chapter or verse position did not hold a number.
    #[error("'{text}' is not a number")]
    NotANumber { text: String },

    /// A verse segment appeared before any chapter was established.
    #[error("verse segment '{segment}' appears before any chapter")]
    VerseWithoutChapterContext { segment: String },

    /// The citation contains no chapter/verse digits at all.
    #[error("citation '{citation}' has no chapter or verse part")]
    MissingSections { citation: String },
}

//! Citation parsing and range expansion for scripture and confession texts.
//!
//! A citation is a terse, human-typed reference such as
//! `创1:1-5,7,9,11-15,2:1-3` or `西敏信条3:2-3`. This crate turns such a
//! string into an ordered sequence of [`SectionRequest`] values and then
//! expands those into [`VerseMarker`]s that a verse store can answer
//! one query at a time.
//!
//! The grammar is deliberately stateful: once a `:` segment has fixed a
//! chapter, every later bare number is a verse of that chapter, never a
//! new chapter. See [`parser`] for the full rules.
//!
//! # Example
//!
//! ```
//! use versicle_citation::{parse, Grammar};
//!
//! let citation = parse("诗42-43", Grammar::Scripture).unwrap();
//! assert_eq!(citation.name.as_deref(), Some("诗"));
//! assert_eq!(citation.sections.len(), 1);
//! ```

pub mod error;
pub mod expand;
pub mod grammar;
pub mod parser;
pub mod section;

// Re-export main types at crate root
pub use error::CitationError;
pub use expand::{VerseMarker, expand};
pub use grammar::{Grammar, ParsedCitation, parse, parse_list};
pub use parser::parse_sections;
pub use section::{BoundaryMode, CanonicalSections, SectionRequest};

//! Verse resolution for parsed citations.
//!
//! `versicle-citation` turns a citation string into markers; this crate
//! answers them against a [`VerseStore`] and packages the two citation
//! families behind small service fronts:
//!
//! - [`ScriptureService`]: book-name validation, `;`-joined citation
//!   lists, optional footnote stripping.
//! - [`ConfessionService`]: bookless chapters with display names.
//!
//! The store is always a borrowed, request-scoped handle; nothing here
//! retries, caches or holds global state.

pub mod confession;
pub mod error;
pub mod format;
pub mod resolver;
pub mod scripture;
pub mod store;

// Re-export main types at crate root
pub use confession::ConfessionService;
pub use error::{ResolutionError, ServiceError, StoreError};
pub use format::{FormatRegistry, Formatter};
pub use resolver::{ResolveOptions, ResolvedVerse, resolve};
pub use scripture::{ScriptureCitation, ScripturePassage, ScriptureService};
pub use store::{BookNumber, Corpus, MemoryVerseStore, VerseRecord, VerseRow, VerseStore};

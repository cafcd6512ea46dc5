//! Confession citation service.
//!
//! Confession citations (`西敏信条3:2-3`) have no book: the leading title
//! is split off and discarded, chapters index the confession directly,
//! and each resolved verse carries its chapter's display name from the
//! store's chapter-name table.

use crate::error::{Result, ServiceError};
use crate::format::FormatRegistry;
use crate::resolver::{ResolveOptions, ResolvedVerse, resolve};
use crate::store::VerseStore;
use versicle_citation::{Grammar, ParsedCitation, expand, parse};

/// Confession corpora occupy a single implicit book slot.
const CONFESSION_BOOK_ID: u32 = 0;

/// Confession service over a borrowed store handle.
#[derive(Debug)]
pub struct ConfessionService<'a, S: VerseStore> {
    store: &'a S,
    options: ResolveOptions,
}

impl<'a, S: VerseStore> ConfessionService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            options: ResolveOptions {
                strip_pattern: None,
                with_chapter_names: true,
            },
        }
    }

    /// Parse one confession citation (no `;` composition here).
    pub fn parse_citation(&self, input: &str) -> Result<ParsedCitation> {
        Ok(parse(input, Grammar::Confession)?)
    }

    /// Parse and resolve a confession citation into its verses.
    ///
    /// All four composite shapes (single verse, single whole chapter,
    /// whole-chapter span, partial-to-partial span) route through the
    /// shared request/marker vocabulary.
    pub fn passage(&self, input: &str) -> Result<Vec<ResolvedVerse>> {
        let citation = self.parse_citation(input)?;
        let markers = expand(&citation.sections);
        Ok(resolve(
            CONFESSION_BOOK_ID,
            &markers,
            self.store,
            &self.options,
        )?)
    }

    /// Parse, resolve and format a confession citation.
    pub fn passage_with_format(
        &self,
        input: &str,
        format: &str,
        registry: &FormatRegistry,
    ) -> Result<String> {
        let verses = self.passage(input)?;
        registry
            .format(format, &verses)
            .ok_or_else(|| ServiceError::UnknownFormat {
                name: format.to_string(),
            })
    }
}

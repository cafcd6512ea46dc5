//! Scripture citation service.
//!
//! The full pipeline for scripture fields: split the `;`-joined citation
//! list, split each book name off, resolve every book against the store
//! before any verse is read, expand the sections and resolve them, and
//! optionally push the result through a named format.

use crate::error::{ResolutionError, Result, ServiceError};
use crate::format::FormatRegistry;
use crate::resolver::{ResolveOptions, ResolvedVerse, resolve};
use crate::store::{BookNumber, VerseStore};
use regex::Regex;
use versicle_citation::{Grammar, ParsedCitation, expand, parse_list};

/// A citation whose book has been resolved to its canonical names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureCitation {
    pub book: BookNumber,
    pub citation: ParsedCitation,
}

/// One resolved passage: the canonical book plus its verses in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScripturePassage {
    pub book: BookNumber,
    pub verses: Vec<ResolvedVerse>,
}

/// Scripture service over a borrowed store handle.
///
/// All configuration is explicit: the store, and an optional strip
/// pattern applied to every verse text (corpora embed footnote markers
/// the slides must not show).
#[derive(Debug)]
pub struct ScriptureService<'a, S: VerseStore> {
    store: &'a S,
    options: ResolveOptions,
}

impl<'a, S: VerseStore> ScriptureService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_strip_pattern(mut self, pattern: Regex) -> Self {
        self.options.strip_pattern = Some(pattern);
        self
    }

    /// Parse a citation field and resolve every book name.
    ///
    /// Book resolution happens for the whole list before any verse query,
    /// so an unknown book fails without partial I/O. The typed name is
    /// replaced by the store's canonical full and short names.
    pub fn parse_citations(&self, input: &str) -> Result<Vec<ScriptureCitation>> {
        let citations = parse_list(input, Grammar::Scripture)?;
        citations
            .into_iter()
            .map(|citation| self.resolve_book(citation))
            .collect()
    }

    fn resolve_book(&self, citation: ParsedCitation) -> Result<ScriptureCitation> {
        let name = citation.name.clone().unwrap_or_default();
        let book = self
            .store
            .book_by_name(&name, &name)
            .map_err(ResolutionError::from)?
            .ok_or_else(|| ResolutionError::BookNotFound { name: name.clone() })?;
        tracing::debug!(name = %name, book_id = book.book_id, "resolved book");
        Ok(ScriptureCitation { book, citation })
    }

    /// Resolve one parsed citation into its verses.
    pub fn passage(&self, citation: &ScriptureCitation) -> Result<ScripturePassage> {
        let markers = expand(&citation.citation.sections);
        let verses = resolve(citation.book.book_id, &markers, self.store, &self.options)?;
        Ok(ScripturePassage {
            book: citation.book.clone(),
            verses,
        })
    }

    /// Parse and resolve a whole citation field.
    pub fn passages(&self, input: &str) -> Result<Vec<ScripturePassage>> {
        let citations = self.parse_citations(input)?;
        citations
            .iter()
            .map(|citation| self.passage(citation))
            .collect()
    }

    /// Parse, resolve and format a citation field, one string per passage.
    pub fn passages_with_format(
        &self,
        input: &str,
        format: &str,
        registry: &FormatRegistry,
    ) -> Result<Vec<String>> {
        let passages = self.passages(input)?;
        let formatter = registry.get(format).ok_or_else(|| ServiceError::UnknownFormat {
            name: format.to_string(),
        })?;
        Ok(passages
            .iter()
            .map(|passage| formatter(&passage.verses))
            .collect())
    }
}

//! Marker resolution against a verse store.
//!
//! Each marker becomes exactly one store query. Range markers renumber
//! their rows as they stream in: whole chapters and from-start ranges
//! count from 1, to-end ranges count from the verse the citation named.
//! Renumbering exists because corpora carry placeholder rows the store
//! filters out, so row position and true verse number can drift apart.

use crate::error::ResolutionError;
use crate::store::{VerseRow, VerseStore};
use regex::Regex;
use serde::{Deserialize, Serialize};
use versicle_citation::VerseMarker;

/// A verse resolved to renderable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVerse {
    pub book_id: u32,
    /// Populated for confession citations only.
    pub chapter_name: Option<String>,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Per-request resolution knobs, always passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Symbols stripped from every verse text before it is recorded.
    pub strip_pattern: Option<Regex>,
    /// Attach chapter names from the store (confession corpora).
    pub with_chapter_names: bool,
}

/// Resolve markers in request order into verse records.
///
/// Empty results are dropped silently for range markers (a chapter may
/// have fewer verses than a neighbor) but are an error for exact ones.
/// If every marker resolves to zero rows the whole request is
/// [`ResolutionError::EmptyResult`].
pub fn resolve<S: VerseStore>(
    book_id: u32,
    markers: &[VerseMarker],
    store: &S,
    options: &ResolveOptions,
) -> Result<Vec<ResolvedVerse>, ResolutionError> {
    let mut resolved = Vec::new();
    for marker in markers {
        match *marker {
            VerseMarker::Exact { chapter, verse } => {
                let text = store.lookup_exact(book_id, chapter, verse)?.ok_or(
                    ResolutionError::VerseNotFound {
                        book_id,
                        chapter,
                        verse,
                    },
                )?;
                let chapter_name = chapter_label(store, options, chapter)?;
                resolved.push(make_verse(
                    book_id,
                    chapter_name,
                    chapter,
                    verse,
                    text,
                    options,
                ));
            }
            VerseMarker::WholeChapter { chapter } => {
                let rows = store.lookup_chapter(book_id, chapter)?;
                push_renumbered(book_id, chapter, 1, rows, store, options, &mut resolved)?;
            }
            VerseMarker::FromChapterStart { chapter, end_verse } => {
                let rows = store.lookup_until(book_id, chapter, end_verse)?;
                push_renumbered(book_id, chapter, 1, rows, store, options, &mut resolved)?;
            }
            VerseMarker::ToChapterEnd {
                chapter,
                start_verse,
            } => {
                let rows = store.lookup_from(book_id, chapter, start_verse)?;
                push_renumbered(
                    book_id,
                    chapter,
                    start_verse,
                    rows,
                    store,
                    options,
                    &mut resolved,
                )?;
            }
        }
    }
    if resolved.is_empty() {
        tracing::warn!(book_id, "citation resolved to no verses");
        return Err(ResolutionError::EmptyResult { book_id });
    }
    if !verses_in_order(&resolved) {
        // Reading order wins over rejection: the citation asked for the
        // verses in that order, so we surface the oddity and keep going.
        tracing::warn!(book_id, "verse numbers not increasing within a chapter run");
    }
    Ok(resolved)
}

/// Whether verse numbers are strictly increasing within each contiguous
/// chapter run of the output.
fn verses_in_order(verses: &[ResolvedVerse]) -> bool {
    verses
        .windows(2)
        .all(|pair| pair[0].chapter != pair[1].chapter || pair[0].verse < pair[1].verse)
}

/// Append range rows, renumbering sequentially from `first_number`.
fn push_renumbered<S: VerseStore>(
    book_id: u32,
    chapter: u32,
    first_number: u32,
    rows: Vec<VerseRow>,
    store: &S,
    options: &ResolveOptions,
    out: &mut Vec<ResolvedVerse>,
) -> Result<(), ResolutionError> {
    if rows.is_empty() {
        tracing::debug!(book_id, chapter, "range marker matched no rows");
        return Ok(());
    }
    let chapter_name = chapter_label(store, options, chapter)?;
    let mut number = first_number;
    for (_, text) in rows {
        out.push(make_verse(
            book_id,
            chapter_name.clone(),
            chapter,
            number,
            text,
            options,
        ));
        number += 1;
    }
    Ok(())
}

fn chapter_label<S: VerseStore>(
    store: &S,
    options: &ResolveOptions,
    chapter: u32,
) -> Result<Option<String>, ResolutionError> {
    if options.with_chapter_names {
        Ok(store.chapter_name(chapter)?)
    } else {
        Ok(None)
    }
}

fn make_verse(
    book_id: u32,
    chapter_name: Option<String>,
    chapter: u32,
    verse: u32,
    text: String,
    options: &ResolveOptions,
) -> ResolvedVerse {
    let text = match &options.strip_pattern {
        Some(pattern) => pattern.replace_all(&text, "").into_owned(),
        None => text,
    };
    ResolvedVerse {
        book_id,
        chapter_name,
        chapter,
        verse,
        text,
    }
}

//! Parsed citation sections.
//!
//! A [`SectionRequest`] is the still-abstract form of one chapter/verse
//! range: chapter bounds, optional verse bounds and a [`BoundaryMode`]
//! saying how the edges are meant. Requests are immutable values created
//! by the parser and consumed once by the expander.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the edges of a section's range are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Verse numbers are taken literally.
    Exact,
    /// From the first verse of the chapter through `end_verse`.
    FromChapterStart,
    /// From `start_verse` through the last verse of the chapter.
    ToChapterEnd,
    /// Every verse of a single chapter.
    WholeChapter,
    /// Every verse of a run of whole chapters.
    ChapterSpan,
}

/// One parsed chapter/verse range, before expansion.
///
/// Invariants: `start_chapter` is always set; `end_chapter` equals
/// `start_chapter` unless the request spans whole chapters; absent verse
/// bounds mean "whole chapter" for the relevant edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRequest {
    pub start_chapter: u32,
    pub end_chapter: u32,
    pub start_verse: Option<u32>,
    pub end_verse: Option<u32>,
    pub boundary: BoundaryMode,
}

impl SectionRequest {
    /// Every verse of one chapter.
    pub fn whole_chapter(chapter: u32) -> Self {
        Self {
            start_chapter: chapter,
            end_chapter: chapter,
            start_verse: None,
            end_verse: None,
            boundary: BoundaryMode::WholeChapter,
        }
    }

    /// Every verse of chapters `start..=end`.
    pub fn chapter_span(start: u32, end: u32) -> Self {
        Self {
            start_chapter: start,
            end_chapter: end,
            start_verse: None,
            end_verse: None,
            boundary: BoundaryMode::ChapterSpan,
        }
    }

    /// Verses `start..=end` of one chapter, numbers taken literally.
    pub fn exact(chapter: u32, start_verse: u32, end_verse: u32) -> Self {
        Self {
            start_chapter: chapter,
            end_chapter: chapter,
            start_verse: Some(start_verse),
            end_verse: Some(end_verse),
            boundary: BoundaryMode::Exact,
        }
    }

    /// From `start_verse` through the last verse of the chapter.
    pub fn to_chapter_end(chapter: u32, start_verse: u32) -> Self {
        Self {
            start_chapter: chapter,
            end_chapter: chapter,
            start_verse: Some(start_verse),
            end_verse: None,
            boundary: BoundaryMode::ToChapterEnd,
        }
    }

    /// From the first verse of the chapter through `end_verse`.
    pub fn from_chapter_start(chapter: u32, end_verse: u32) -> Self {
        Self {
            start_chapter: chapter,
            end_chapter: chapter,
            start_verse: None,
            end_verse: Some(end_verse),
            boundary: BoundaryMode::FromChapterStart,
        }
    }
}

/// Canonical text form of a request sequence.
///
/// Re-parsing the rendered string yields the same sequence, which is the
/// stability guarantee callers rely on when echoing citations back to the
/// user.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalSections<'a>(pub &'a [SectionRequest]);

impl fmt::Display for CanonicalSections<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mirrors the parser's state machine: once a colon has been
        // rendered for a chapter, later exact requests in the same chapter
        // may drop the chapter prefix.
        let mut verse_context: Option<u32> = None;
        for (i, req) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match req.boundary {
                BoundaryMode::WholeChapter => {
                    if verse_context.is_some() {
                        // A bare number here would re-parse as a verse of
                        // the open chapter; the arrow form is the
                        // whole-chapter spelling that survives the flag.
                        write!(f, "{}->{}", req.start_chapter, req.start_chapter)?;
                    } else {
                        write!(f, "{}", req.start_chapter)?;
                    }
                }
                BoundaryMode::ChapterSpan => {
                    write!(f, "{}-{}", req.start_chapter, req.end_chapter)?
                }
                BoundaryMode::Exact => {
                    let start = req.start_verse.unwrap_or(0);
                    let end = req.end_verse.unwrap_or(start);
                    if verse_context != Some(req.start_chapter) {
                        write!(f, "{}:", req.start_chapter)?;
                        verse_context = Some(req.start_chapter);
                    }
                    if start == end {
                        write!(f, "{start}")?;
                    } else {
                        write!(f, "{start}-{end}")?;
                    }
                }
                BoundaryMode::ToChapterEnd => {
                    let start = req.start_verse.unwrap_or(1);
                    write!(f, "{}:{}->{}", req.start_chapter, start, req.start_chapter)?;
                }
                BoundaryMode::FromChapterStart => {
                    let end = req.end_verse.unwrap_or(1);
                    write!(f, "{}->{}:{}", req.start_chapter, req.start_chapter, end)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_exact_shares_chapter_prefix() {
        let requests = [
            SectionRequest::exact(1, 1, 5),
            SectionRequest::exact(1, 7, 7),
            SectionRequest::exact(2, 1, 3),
        ];
        assert_eq!(CanonicalSections(&requests).to_string(), "1:1-5,7,2:1-3");
    }

    #[test]
    fn test_canonical_whole_chapters() {
        let requests = [
            SectionRequest::whole_chapter(3),
            SectionRequest::chapter_span(42, 43),
        ];
        assert_eq!(CanonicalSections(&requests).to_string(), "3,42-43");
    }

    #[test]
    fn test_canonical_whole_chapter_after_verse_context() {
        let requests = [
            SectionRequest::exact(1, 1, 1),
            SectionRequest::whole_chapter(2),
            SectionRequest::whole_chapter(3),
        ];
        assert_eq!(CanonicalSections(&requests).to_string(), "1:1,2->2,3->3");
    }

    #[test]
    fn test_canonical_span_boundaries() {
        let requests = [
            SectionRequest::to_chapter_end(1, 10),
            SectionRequest::from_chapter_start(2, 10),
        ];
        assert_eq!(CanonicalSections(&requests).to_string(), "1:10->1,2->2:10");
    }
}

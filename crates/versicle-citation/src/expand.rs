//! Range expansion: section requests to store-answerable markers.
//!
//! Expansion flattens every [`SectionRequest`] into [`VerseMarker`]s, one
//! per store query. Exact ranges become one marker per verse; chapter
//! spans become one whole-chapter marker per chapter. Expansion never
//! reorders: chapter order and within-chapter verse order are exactly the
//! parser's.

use crate::section::{BoundaryMode, SectionRequest};
use serde::{Deserialize, Serialize};

/// One resolvable unit, ready for a single verse-store query.
///
/// `Exact` is a fully concrete verse reference (the book is implicit, it
/// travels separately). The other variants stand for ranges whose true
/// verse count only the store knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerseMarker {
    /// This verse, number taken literally.
    Exact { chapter: u32, verse: u32 },
    /// Every verse of the chapter, numbered from 1 in store order.
    WholeChapter { chapter: u32 },
    /// Verses from the chapter start through `end_verse`, numbered from 1.
    FromChapterStart { chapter: u32, end_verse: u32 },
    /// Verses from `start_verse` through the chapter end, numbered from
    /// `start_verse`.
    ToChapterEnd { chapter: u32, start_verse: u32 },
}

/// Expand parsed requests into an ordered marker sequence.
pub fn expand(requests: &[SectionRequest]) -> Vec<VerseMarker> {
    let mut markers = Vec::new();
    for request in requests {
        match request.boundary {
            BoundaryMode::Exact => {
                let start = request.start_verse.unwrap_or(0);
                let end = request.end_verse.unwrap_or(start);
                for verse in start..=end {
                    markers.push(VerseMarker::Exact {
                        chapter: request.start_chapter,
                        verse,
                    });
                }
            }
            BoundaryMode::WholeChapter => markers.push(VerseMarker::WholeChapter {
                chapter: request.start_chapter,
            }),
            BoundaryMode::ChapterSpan => {
                for chapter in request.start_chapter..=request.end_chapter {
                    markers.push(VerseMarker::WholeChapter { chapter });
                }
            }
            BoundaryMode::FromChapterStart => markers.push(VerseMarker::FromChapterStart {
                chapter: request.start_chapter,
                end_verse: request.end_verse.unwrap_or(1),
            }),
            BoundaryMode::ToChapterEnd => markers.push(VerseMarker::ToChapterEnd {
                chapter: request.start_chapter,
                start_verse: request.start_verse.unwrap_or(1),
            }),
        }
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ranges_flatten_per_verse() {
        let markers = expand(&[SectionRequest::exact(1, 3, 5)]);
        assert_eq!(
            markers,
            vec![
                VerseMarker::Exact { chapter: 1, verse: 3 },
                VerseMarker::Exact { chapter: 1, verse: 4 },
                VerseMarker::Exact { chapter: 1, verse: 5 },
            ]
        );
    }

    #[test]
    fn test_chapter_span_flattens_per_chapter() {
        let markers = expand(&[SectionRequest::chapter_span(42, 43)]);
        assert_eq!(
            markers,
            vec![
                VerseMarker::WholeChapter { chapter: 42 },
                VerseMarker::WholeChapter { chapter: 43 },
            ]
        );
    }

    #[test]
    fn test_span_boundary_modes() {
        let markers = expand(&[
            SectionRequest::to_chapter_end(1, 10),
            SectionRequest::from_chapter_start(2, 10),
        ]);
        assert_eq!(
            markers,
            vec![
                VerseMarker::ToChapterEnd { chapter: 1, start_verse: 10 },
                VerseMarker::FromChapterStart { chapter: 2, end_verse: 10 },
            ]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let markers = expand(&[
            SectionRequest::exact(2, 1, 1),
            SectionRequest::whole_chapter(1),
            SectionRequest::exact(2, 3, 3),
        ]);
        assert_eq!(
            markers,
            vec![
                VerseMarker::Exact { chapter: 2, verse: 1 },
                VerseMarker::WholeChapter { chapter: 1 },
                VerseMarker::Exact { chapter: 2, verse: 3 },
            ]
        );
    }
}

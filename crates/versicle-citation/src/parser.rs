//! Segment parser for citation section strings.
//!
//! The section part of a citation (`1:1-5,7,9,11-15,2:1-3`) is a list of
//! comma-separated segments. Each segment is classified, in priority
//! order, by scanning for `->`, then `:`, then `-`, else bare digits:
//!
//! 1. `A->B` spans chapters. Each anchor is `chapter` or `chapter:verse`.
//! 2. `C:V` / `C:V1-V2` fixes the chapter and names exact verses.
//! 3. `A-B` is a chapter span before any colon, a verse range after.
//! 4. A bare number is a chapter before any colon, a verse after.
//!
//! The parse is stateful in one direction only: the first colon segment
//! flips the segment kind from `Chapter` to `Verse` and it never flips
//! back within one citation. `1:1-5,7` therefore names verse 7 of
//! chapter 1, not chapter 7. Arrow segments re-establish which chapter
//! later verses attach to, but do not touch the flag.

use crate::error::{CitationError, Result};
use crate::section::SectionRequest;

/// What a bare or dashed number means at the current point of the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Chapter,
    Verse,
}

/// Parse a section string into an ordered request list.
///
/// The input is the citation with any leading book or title name already
/// removed (see [`crate::grammar`]). Output order equals reading order.
pub fn parse_sections(input: &str) -> Result<Vec<SectionRequest>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CitationError::MissingSections {
            citation: input.to_string(),
        });
    }
    tracing::debug!(sections = trimmed, "parsing citation sections");

    let mut requests = Vec::new();
    let mut kind = SegmentKind::Chapter;
    for segment in trimmed.split(',') {
        let segment = segment.trim();
        if segment.contains("->") {
            parse_arrow_segment(segment, &mut requests)?;
        } else if segment.contains(':') {
            parse_colon_segment(segment, &mut requests)?;
            // One-way transition: numbers after this point are verses.
            kind = SegmentKind::Verse;
        } else if segment.contains('-') {
            parse_dash_segment(segment, kind, &mut requests)?;
        } else {
            parse_digit_segment(segment, kind, &mut requests)?;
        }
    }
    Ok(requests)
}

/// One side of an arrow span: a chapter with an optional verse.
struct Anchor {
    chapter: u32,
    verse: Option<u32>,
}

fn parse_anchor(text: &str) -> Result<Anchor> {
    match text.split_once(':') {
        Some((chapter, verse)) => Ok(Anchor {
            chapter: parse_number(chapter)?,
            verse: Some(parse_number(verse)?),
        }),
        None => Ok(Anchor {
            chapter: parse_number(text)?,
            verse: None,
        }),
    }
}

/// `A->B`: one request per chapter from the left anchor's chapter to the
/// right anchor's, inclusive. A left verse makes the first chapter run to
/// its end; a right verse makes the last chapter start from its beginning.
fn parse_arrow_segment(segment: &str, requests: &mut Vec<SectionRequest>) -> Result<()> {
    let Some((left, right)) = segment.split_once("->") else {
        return Err(CitationError::MalformedSegment {
            segment: segment.to_string(),
        });
    };
    let start = parse_anchor(left)?;
    let end = parse_anchor(right)?;
    if end.chapter < start.chapter {
        return Err(CitationError::MalformedSegment {
            segment: segment.to_string(),
        });
    }

    if start.chapter == end.chapter {
        // Both edges land in one chapter; pick the narrowest reading.
        let request = match (start.verse, end.verse) {
            (Some(a), Some(b)) => SectionRequest::exact(start.chapter, a, b),
            (Some(a), None) => SectionRequest::to_chapter_end(start.chapter, a),
            (None, Some(b)) => SectionRequest::from_chapter_start(start.chapter, b),
            (None, None) => SectionRequest::whole_chapter(start.chapter),
        };
        requests.push(request);
        return Ok(());
    }

    for chapter in start.chapter..=end.chapter {
        let request = if chapter == start.chapter {
            match start.verse {
                Some(verse) => SectionRequest::to_chapter_end(chapter, verse),
                None => SectionRequest::whole_chapter(chapter),
            }
        } else if chapter == end.chapter {
            match end.verse {
                Some(verse) => SectionRequest::from_chapter_start(chapter, verse),
                None => SectionRequest::whole_chapter(chapter),
            }
        } else {
            SectionRequest::whole_chapter(chapter)
        };
        requests.push(request);
    }
    Ok(())
}

/// `C:V` or `C:V1-V2`: exact verses of a freshly fixed chapter.
fn parse_colon_segment(segment: &str, requests: &mut Vec<SectionRequest>) -> Result<()> {
    let mut parts = segment.splitn(3, ':');
    let (chapter_text, verse_text) = match (parts.next(), parts.next(), parts.next()) {
        (Some(chapter), Some(verse), None) => (chapter, verse),
        _ => {
            return Err(CitationError::MalformedSegment {
                segment: segment.to_string(),
            });
        }
    };
    let chapter = parse_number(chapter_text)?;
    let (start_verse, end_verse) = if verse_text.contains('-') {
        let (a, b) = split_dash(verse_text)?;
        (parse_number(a)?, parse_number(b)?)
    } else {
        let verse = parse_number(verse_text)?;
        (verse, verse)
    };
    requests.push(SectionRequest::exact(chapter, start_verse, end_verse));
    Ok(())
}

/// `A-B`: a chapter span before any colon, a verse range after one.
fn parse_dash_segment(
    segment: &str,
    kind: SegmentKind,
    requests: &mut Vec<SectionRequest>,
) -> Result<()> {
    let (a, b) = split_dash(segment)?;
    let start = parse_number(a)?;
    let end = parse_number(b)?;
    match kind {
        SegmentKind::Chapter => {
            let request = if start == end {
                SectionRequest::whole_chapter(start)
            } else {
                SectionRequest::chapter_span(start, end)
            };
            requests.push(request);
        }
        SegmentKind::Verse => {
            let chapter = current_chapter(requests, segment)?;
            requests.push(SectionRequest::exact(chapter, start, end));
        }
    }
    Ok(())
}

/// A bare number: a whole chapter before any colon, a single verse after.
fn parse_digit_segment(
    segment: &str,
    kind: SegmentKind,
    requests: &mut Vec<SectionRequest>,
) -> Result<()> {
    if segment.is_empty() {
        return Err(CitationError::MalformedSegment {
            segment: segment.to_string(),
        });
    }
    let number = parse_number(segment)?;
    match kind {
        SegmentKind::Chapter => requests.push(SectionRequest::whole_chapter(number)),
        SegmentKind::Verse => {
            let chapter = current_chapter(requests, segment)?;
            requests.push(SectionRequest::exact(chapter, number, number));
        }
    }
    Ok(())
}

/// The chapter a verse segment attaches to: the end chapter of the last
/// request emitted, so verses after an arrow land in its final chapter.
fn current_chapter(requests: &[SectionRequest], segment: &str) -> Result<u32> {
    requests
        .last()
        .map(|request| request.end_chapter)
        .ok_or_else(|| CitationError::VerseWithoutChapterContext {
            segment: segment.to_string(),
        })
}

fn split_dash(text: &str) -> Result<(&str, &str)> {
    let mut parts = text.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(CitationError::MalformedSegment {
            segment: text.to_string(),
        }),
    }
}

fn parse_number(text: &str) -> Result<u32> {
    let text = text.trim();
    text.parse().map_err(|_| CitationError::NotANumber {
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{BoundaryMode, SectionRequest};

    fn verses_of(requests: &[SectionRequest], chapter: u32) -> Vec<u32> {
        requests
            .iter()
            .filter(|r| r.boundary == BoundaryMode::Exact && r.start_chapter == chapter)
            .flat_map(|r| r.start_verse.unwrap()..=r.end_verse.unwrap())
            .collect()
    }

    #[test]
    fn test_digits_after_colon_are_verses_not_chapters() {
        let requests = parse_sections("1:1-5,7,9,11-15,2:1-3").unwrap();
        assert_eq!(verses_of(&requests, 1), vec![1, 2, 3, 4, 5, 7, 9, 11, 12, 13, 14, 15]);
        assert_eq!(verses_of(&requests, 2), vec![1, 2, 3]);
        // No request ever reads 7 as a new chapter.
        assert!(requests.iter().all(|r| r.boundary == BoundaryMode::Exact));
    }

    #[test]
    fn test_dash_before_colon_is_a_chapter_span() {
        let requests = parse_sections("42-43").unwrap();
        assert_eq!(requests, vec![SectionRequest::chapter_span(42, 43)]);
    }

    #[test]
    fn test_comma_separated_chapters() {
        let requests = parse_sections("42,43").unwrap();
        assert_eq!(
            requests,
            vec![
                SectionRequest::whole_chapter(42),
                SectionRequest::whole_chapter(43),
            ]
        );
    }

    #[test]
    fn test_arrow_with_verses_on_both_sides() {
        let requests = parse_sections("1:10->2:10").unwrap();
        assert_eq!(
            requests,
            vec![
                SectionRequest::to_chapter_end(1, 10),
                SectionRequest::from_chapter_start(2, 10),
            ]
        );
    }

    #[test]
    fn test_arrow_spanning_interior_chapters() {
        let requests = parse_sections("1:10->4:10").unwrap();
        assert_eq!(
            requests,
            vec![
                SectionRequest::to_chapter_end(1, 10),
                SectionRequest::whole_chapter(2),
                SectionRequest::whole_chapter(3),
                SectionRequest::from_chapter_start(4, 10),
            ]
        );
    }

    #[test]
    fn test_arrow_without_left_verse() {
        let requests = parse_sections("1->2:10").unwrap();
        assert_eq!(
            requests,
            vec![
                SectionRequest::whole_chapter(1),
                SectionRequest::from_chapter_start(2, 10),
            ]
        );
    }

    #[test]
    fn test_arrow_without_right_verse() {
        let requests = parse_sections("1:10->2").unwrap();
        assert_eq!(
            requests,
            vec![
                SectionRequest::to_chapter_end(1, 10),
                SectionRequest::whole_chapter(2),
            ]
        );
    }

    #[test]
    fn test_single_chapter_arrow_collapses_to_exact() {
        let requests = parse_sections("3:2->3:6").unwrap();
        assert_eq!(requests, vec![SectionRequest::exact(3, 2, 6)]);
    }

    #[test]
    fn test_verses_after_arrow_attach_to_its_last_chapter() {
        let requests = parse_sections("1:1,2:3->4:2,5").unwrap();
        // The bare 5 is a verse of chapter 4 (flag flipped at `1:1`,
        // chapter context re-established by the arrow).
        assert_eq!(requests.last(), Some(&SectionRequest::exact(4, 5, 5)));
    }

    #[test]
    fn test_empty_dash_operand_is_not_a_number() {
        let err = parse_sections("1:-5").unwrap_err();
        assert_eq!(err, CitationError::NotANumber { text: String::new() });
    }

    #[test]
    fn test_non_numeric_chapter() {
        let err = parse_sections("abc").unwrap_err();
        assert_eq!(
            err,
            CitationError::NotANumber {
                text: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_empty_segment_is_malformed() {
        let err = parse_sections("1:1,,3").unwrap_err();
        assert_eq!(
            err,
            CitationError::MalformedSegment {
                segment: String::new()
            }
        );
    }

    #[test]
    fn test_double_colon_is_malformed() {
        let err = parse_sections("1:2:3").unwrap_err();
        assert_eq!(
            err,
            CitationError::MalformedSegment {
                segment: "1:2:3".to_string()
            }
        );
    }

    #[test]
    fn test_reversed_arrow_is_malformed() {
        assert!(matches!(
            parse_sections("4:1->2:5"),
            Err(CitationError::MalformedSegment { .. })
        ));
    }

    #[test]
    fn test_empty_input_has_no_sections() {
        assert!(matches!(
            parse_sections("  "),
            Err(CitationError::MissingSections { .. })
        ));
    }

    #[test]
    fn test_verse_without_chapter_context() {
        let err = current_chapter(&[], "7").unwrap_err();
        assert_eq!(
            err,
            CitationError::VerseWithoutChapterContext {
                segment: "7".to_string()
            }
        );
    }
}

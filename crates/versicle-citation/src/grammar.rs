//! Citation family grammars.
//!
//! Scripture and confession citations share the same section grammar but
//! differ in their lexical lead-in: a scripture citation opens with a book
//! name (which may itself start with a digit, as in `1John`), a confession
//! citation opens with the confession title or nothing at all. The family
//! only selects how that lead-in is split off; the section grammar in
//! [`crate::parser`] is shared.

use crate::error::{CitationError, Result};
use crate::parser::parse_sections;
use crate::section::SectionRequest;
use serde::{Deserialize, Serialize};

/// Which citation family's lexical rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grammar {
    /// Book name required; `;` joins independent citations.
    Scripture,
    /// No book; the string may open with a confession title.
    Confession,
}

impl Grammar {
    /// Byte index where the leading name ends and the sections begin, or
    /// `None` when the string holds no section digits at all.
    ///
    /// Scripture scans from the second character (the first is always part
    /// of the book name) and only `1-9` opens a chapter number; confession
    /// scans from the start and accepts any digit.
    pub fn sections_start(self, input: &str) -> Option<usize> {
        match self {
            Grammar::Scripture => input
                .char_indices()
                .skip(1)
                .find(|&(_, c)| c.is_ascii_digit() && c != '0')
                .map(|(i, _)| i),
            Grammar::Confession => input
                .char_indices()
                .find(|&(_, c)| c.is_ascii_digit())
                .map(|(i, _)| i),
        }
    }
}

/// A parsed citation: the original text, the leading name (book or
/// confession title) if any, and its section requests in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCitation {
    pub raw: String,
    pub name: Option<String>,
    pub sections: Vec<SectionRequest>,
}

/// Parse one citation under the given family grammar.
///
/// The name is split off but not validated here; whether it names a real
/// book is the resolver's concern.
pub fn parse(input: &str, grammar: Grammar) -> Result<ParsedCitation> {
    let trimmed = input.trim();
    let Some(start) = grammar.sections_start(trimmed) else {
        return Err(CitationError::MissingSections {
            citation: input.to_string(),
        });
    };
    let name = trimmed[..start].trim();
    let sections = parse_sections(&trimmed[start..])?;
    tracing::debug!(name, count = sections.len(), "parsed citation");
    Ok(ParsedCitation {
        raw: trimmed.to_string(),
        name: (!name.is_empty()).then(|| name.to_string()),
        sections,
    })
}

/// Parse a `;`-joined citation list (scripture fields may carry several).
pub fn parse_list(input: &str, grammar: Grammar) -> Result<Vec<ParsedCitation>> {
    input.split(';').map(|item| parse(item, grammar)).collect()
}

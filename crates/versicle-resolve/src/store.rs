//! Verse store contract and in-memory implementation.
//!
//! The store owns the corpus (book/chapter/verse to text); this crate only
//! consumes the narrow query surface below. Row order in range results is
//! chapter order, and rows holding the `"-"` placeholder (verses absent
//! from a translation) never appear in results.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder text marking a verse the corpus does not carry.
const PLACEHOLDER: &str = "-";

/// One verse row of a range result: the store's verse number and text.
pub type VerseRow = (u32, String);

/// A book resolved by name: its id and canonical names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookNumber {
    pub book_id: u32,
    pub full_name: String,
    pub short_name: String,
}

/// The query contract every verse store must answer.
///
/// Implementations are request-scoped handles; callers acquire one before
/// resolution and borrow it for the duration, so release is guaranteed on
/// every exit path. `chapter_name` defaults to nothing because only
/// confession corpora carry a chapter-name table.
pub trait VerseStore {
    /// Resolve a book by full or abbreviated name.
    fn book_by_name(
        &self,
        full_name: &str,
        short_name: &str,
    ) -> Result<Option<BookNumber>, StoreError>;

    /// Reverse lookup: canonical names for a book id.
    fn book_by_id(&self, book_id: u32) -> Result<Option<BookNumber>, StoreError>;

    /// The text of one verse, if present.
    fn lookup_exact(
        &self,
        book_id: u32,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<String>, StoreError>;

    /// Every verse of a chapter, in order.
    fn lookup_chapter(&self, book_id: u32, chapter: u32) -> Result<Vec<VerseRow>, StoreError>;

    /// Verses from `verse` through the chapter end, in order.
    fn lookup_from(
        &self,
        book_id: u32,
        chapter: u32,
        verse: u32,
    ) -> Result<Vec<VerseRow>, StoreError>;

    /// Verses from the chapter start through `verse`, in order.
    fn lookup_until(
        &self,
        book_id: u32,
        chapter: u32,
        verse: u32,
    ) -> Result<Vec<VerseRow>, StoreError>;

    /// Display name of a chapter (confession corpora only).
    fn chapter_name(&self, chapter: u32) -> Result<Option<String>, StoreError> {
        let _ = chapter;
        Ok(None)
    }
}

/// One corpus verse in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book_id: u32,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Serialized corpus shape for [`MemoryVerseStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub books: Vec<BookNumber>,
    #[serde(default)]
    pub verses: Vec<VerseRecord>,
    #[serde(default)]
    pub chapter_names: Vec<(u32, String)>,
}

/// In-memory verse store, for tests and bundled corpora.
#[derive(Debug, Clone, Default)]
pub struct MemoryVerseStore {
    books: Vec<BookNumber>,
    verses: BTreeMap<(u32, u32, u32), String>,
    chapter_names: BTreeMap<u32, String>,
}

impl MemoryVerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(
        &mut self,
        book_id: u32,
        full_name: impl Into<String>,
        short_name: impl Into<String>,
    ) -> &mut Self {
        self.books.push(BookNumber {
            book_id,
            full_name: full_name.into(),
            short_name: short_name.into(),
        });
        self
    }

    pub fn add_verse(
        &mut self,
        book_id: u32,
        chapter: u32,
        verse: u32,
        text: impl Into<String>,
    ) -> &mut Self {
        self.verses.insert((book_id, chapter, verse), text.into());
        self
    }

    pub fn add_chapter_name(&mut self, chapter: u32, name: impl Into<String>) -> &mut Self {
        self.chapter_names.insert(chapter, name.into());
        self
    }

    fn range_rows(
        &self,
        book_id: u32,
        chapter: u32,
        from_verse: u32,
        until_verse: u32,
    ) -> Vec<VerseRow> {
        self.verses
            .range((book_id, chapter, from_verse)..=(book_id, chapter, until_verse))
            .filter(|(_, text)| text.as_str() != PLACEHOLDER)
            .map(|(&(_, _, verse), text)| (verse, text.clone()))
            .collect()
    }
}

impl From<Corpus> for MemoryVerseStore {
    fn from(corpus: Corpus) -> Self {
        let mut store = MemoryVerseStore::new();
        store.books = corpus.books;
        for record in corpus.verses {
            store.add_verse(record.book_id, record.chapter, record.verse, record.text);
        }
        for (chapter, name) in corpus.chapter_names {
            store.add_chapter_name(chapter, name);
        }
        store
    }
}

impl VerseStore for MemoryVerseStore {
    fn book_by_name(
        &self,
        full_name: &str,
        short_name: &str,
    ) -> Result<Option<BookNumber>, StoreError> {
        Ok(self
            .books
            .iter()
            .find(|book| book.full_name == full_name || book.short_name == short_name)
            .cloned())
    }

    fn book_by_id(&self, book_id: u32) -> Result<Option<BookNumber>, StoreError> {
        Ok(self
            .books
            .iter()
            .find(|book| book.book_id == book_id)
            .cloned())
    }

    fn lookup_exact(
        &self,
        book_id: u32,
        chapter: u32,
        verse: u32,
    ) -> Result<Option<String>, StoreError> {
        Ok(self
            .verses
            .get(&(book_id, chapter, verse))
            .filter(|text| text.as_str() != PLACEHOLDER)
            .cloned())
    }

    fn lookup_chapter(&self, book_id: u32, chapter: u32) -> Result<Vec<VerseRow>, StoreError> {
        Ok(self.range_rows(book_id, chapter, 0, u32::MAX))
    }

    fn lookup_from(
        &self,
        book_id: u32,
        chapter: u32,
        verse: u32,
    ) -> Result<Vec<VerseRow>, StoreError> {
        Ok(self.range_rows(book_id, chapter, verse, u32::MAX))
    }

    fn lookup_until(
        &self,
        book_id: u32,
        chapter: u32,
        verse: u32,
    ) -> Result<Vec<VerseRow>, StoreError> {
        Ok(self.range_rows(book_id, chapter, 0, verse))
    }

    fn chapter_name(&self, chapter: u32) -> Result<Option<String>, StoreError> {
        Ok(self.chapter_names.get(&chapter).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryVerseStore {
        let mut store = MemoryVerseStore::new();
        store.add_book(1, "创世记", "创");
        store.add_verse(1, 1, 1, "起初");
        store.add_verse(1, 1, 2, "-");
        store.add_verse(1, 1, 3, "神说");
        store
    }

    #[test]
    fn test_book_lookup_by_either_name() {
        let store = sample();
        assert_eq!(
            store.book_by_name("创世记", "创世记").unwrap().unwrap().book_id,
            1
        );
        assert_eq!(store.book_by_name("创", "创").unwrap().unwrap().book_id, 1);
        assert!(store.book_by_name("出", "出").unwrap().is_none());
    }

    #[test]
    fn test_book_lookup_by_id_echoes_canonical_names() {
        let store = sample();
        let store: &dyn VerseStore = &store;
        let book = store.book_by_id(1).unwrap().unwrap();
        assert_eq!(book.full_name, "创世记");
        assert_eq!(book.short_name, "创");
        assert!(store.book_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_placeholder_rows_are_invisible() {
        let store = sample();
        assert_eq!(store.lookup_exact(1, 1, 2).unwrap(), None);
        let rows = store.lookup_chapter(1, 1).unwrap();
        assert_eq!(
            rows,
            vec![(1, "起初".to_string()), (3, "神说".to_string())]
        );
    }

    #[test]
    fn test_range_queries() {
        let store = sample();
        assert_eq!(
            store.lookup_from(1, 1, 3).unwrap(),
            vec![(3, "神说".to_string())]
        );
        assert_eq!(
            store.lookup_until(1, 1, 1).unwrap(),
            vec![(1, "起初".to_string())]
        );
    }

    #[test]
    fn test_corpus_deserializes_from_json() {
        let json = r#"{
            "books": [{"book_id": 1, "full_name": "创世记", "short_name": "创"}],
            "verses": [
                {"book_id": 1, "chapter": 1, "verse": 1, "text": "起初"}
            ],
            "chapter_names": [[1, "论圣经"]]
        }"#;
        let corpus: Corpus = serde_json::from_str(json).unwrap();
        let store = MemoryVerseStore::from(corpus);
        assert_eq!(store.lookup_exact(1, 1, 1).unwrap().as_deref(), Some("起初"));
        assert_eq!(store.chapter_name(1).unwrap().as_deref(), Some("论圣经"));
    }
}

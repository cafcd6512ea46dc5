//! Named text transforms applied to resolved verses.
//!
//! The engine does not render slides; it hands a verse sequence to a
//! transform keyed by an opaque format identifier. Formats are closures
//! in a registry so the slide layer can install its own without this
//! crate knowing about templates.

use crate::resolver::ResolvedVerse;
use std::collections::HashMap;
use std::fmt;

/// A text transform over a resolved verse sequence.
pub type Formatter = dyn Fn(&[ResolvedVerse]) -> String + Send + Sync;

/// Registry mapping format identifiers to transforms.
#[derive(Default)]
pub struct FormatRegistry {
    formats: HashMap<String, Box<Formatter>>,
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.formats.keys().collect();
        names.sort();
        f.debug_struct("FormatRegistry")
            .field("formats", &names)
            .finish()
    }
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the two built-in formats: `plain` (text only)
    /// and `numbered` (verse number before each text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("plain", |verses: &[ResolvedVerse]| {
            verses
                .iter()
                .map(|v| v.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        });
        registry.register("numbered", |verses: &[ResolvedVerse]| {
            verses
                .iter()
                .map(|v| format!("{} {}", v.verse, v.text))
                .collect::<Vec<_>>()
                .join("\n")
        });
        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        format: impl Fn(&[ResolvedVerse]) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.formats.insert(name.into(), Box::new(format));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Formatter> {
        self.formats.get(name).map(|f| f.as_ref())
    }

    /// Apply the named format, or `None` if it is not registered.
    pub fn format(&self, name: &str, verses: &[ResolvedVerse]) -> Option<String> {
        self.get(name).map(|format| format(verses))
    }
}

//! Dataset types
//!
//! Typed schemas for the metadata document (`Books.json`) and the per-book
//! content documents. Documents that do not match fail deserialization
//! instead of surfacing missing fields later.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One book as listed in the metadata document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Canonical English name, also the content document name
    pub english: String,
    /// Vernacular (Telugu) name
    pub telugu: String,
}

/// Wire shape of a `Books.json` element: `{ "book": { english, telugu } }`
#[derive(Debug, Deserialize)]
struct BookRecord {
    book: BookEntry,
}

/// Ordered list of books, in dataset order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BooksIndex {
    books: Vec<BookEntry>,
}

impl BooksIndex {
    pub fn new(books: Vec<BookEntry>) -> Self {
        Self { books }
    }

    /// Parse the metadata document
    pub fn from_document(document: Value) -> Result<Self, serde_json::Error> {
        let records: Vec<BookRecord> = serde_json::from_value(document)?;
        Ok(Self::new(records.into_iter().map(|r| r.book).collect()))
    }

    pub fn entries(&self) -> &[BookEntry] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// First entry whose Telugu name equals `name` exactly.
    ///
    /// Case-sensitive; Telugu script has no case folding.
    pub fn find_by_telugu(&self, name: &str) -> Option<&BookEntry> {
        self.books.iter().find(|b| b.telugu == name)
    }

    /// First entry whose English name equals `name`, ignoring case
    pub fn find_by_english(&self, name: &str) -> Option<&BookEntry> {
        let wanted = name.to_lowercase();
        self.books.iter().find(|b| b.english.to_lowercase() == wanted)
    }
}

/// Chapter or verse label as stored in the dataset.
///
/// The dataset is free to use strings or numbers. Labels are compared by
/// exact text: a numeric label compares by its JSON decimal form, so `1`
/// matches `"1"` but neither matches `"01"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(Number),
}

impl Label {
    pub fn matches(&self, requested: &str) -> bool {
        match self {
            Label::Text(text) => text == requested,
            Label::Number(number) => number.to_string() == requested,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

/// A single verse record. Unknown fields are kept and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub verse: Label,
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Verse {
    pub fn new(verse: impl Into<Label>, text: impl Into<String>) -> Self {
        Self {
            verse: verse.into(),
            text: text.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: Label,
    pub verses: Vec<Verse>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Chapter {
    pub fn new(chapter: impl Into<Label>, verses: Vec<Verse>) -> Self {
        Self {
            chapter: chapter.into(),
            verses,
            extra: Map::new(),
        }
    }

    /// Take the first verse whose label matches exactly
    pub fn into_verse(self, label: &str) -> Option<Verse> {
        self.verses.into_iter().find(|v| v.verse.matches(label))
    }
}

/// Content document of one book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookContent {
    pub chapters: Vec<Chapter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookContent {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self {
            chapters,
            extra: Map::new(),
        }
    }

    /// Take the first chapter whose label matches exactly
    pub fn into_chapter(self, label: &str) -> Option<Chapter> {
        self.chapters.into_iter().find(|c| c.chapter.matches(label))
    }
}

//! Remote document source
//!
//! The dataset is a set of JSON documents under one base origin:
//! `Books.json` for the metadata and `<EnglishName>.json` per book.
//! Fetching is hidden behind [`DocumentSource`] so the resolution pipeline
//! does not care where documents come from.

mod http;
#[cfg(test)]
pub mod memory;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpSource;

/// Name of the metadata document
pub const METADATA_DOCUMENT: &str = "Books.json";

/// A document that can be requested from the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// The books index
    Metadata,
    /// Content of one book, named by its canonical English key
    Book(String),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Metadata => DocumentKind::Metadata,
            Document::Book(_) => DocumentKind::Content,
        }
    }

    /// File name of the document relative to the base origin
    pub fn file_name(&self) -> String {
        match self {
            Document::Metadata => METADATA_DOCUMENT.to_string(),
            Document::Book(name) => format!("{}.json", name),
        }
    }
}

/// Which class of document a fetch was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Metadata,
    Content,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Metadata => f.write_str("books metadata"),
            DocumentKind::Content => f.write_str("book content"),
        }
    }
}

/// Transport or parse failure while fetching a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to fetch {document}: {reason}")]
pub struct FetchError {
    pub document: DocumentKind,
    pub reason: String,
}

impl FetchError {
    pub fn new(document: DocumentKind, reason: impl Into<String>) -> Self {
        Self {
            document,
            reason: reason.into(),
        }
    }
}

/// Source of dataset documents
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch one document as raw JSON. Single attempt, no retries.
    async fn fetch(&self, document: &Document) -> Result<Value, FetchError>;
}

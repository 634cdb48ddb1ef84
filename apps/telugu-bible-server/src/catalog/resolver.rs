//! Book, chapter and verse resolution
//!
//! A request names a book by its English or Telugu name. Resolution runs:
//!
//! 1. name resolution against the cached books index (Telugu names map to
//!    their English key, anything else passes through unchanged)
//! 2. a case-insensitive existence check of the key in the same index
//! 3. a fresh fetch of the book document (content is never cached)
//! 4. narrowing to the requested chapter and verse by exact label
//!
//! The index is looked up once per request and shared by steps 1 and 2.

use std::sync::Arc;

use crate::source::{Document, DocumentKind, DocumentSource, FetchError};

use super::cache::MetadataCache;
use super::error::{Missing, ResolveError, ResolveResult};
use super::types::{BookContent, BookEntry, BooksIndex, Verse};

/// Map an identifier to a candidate English key.
///
/// Telugu names are matched exactly; anything else is returned verbatim.
pub fn resolve_name(index: &BooksIndex, identifier: &str) -> String {
    match index.find_by_telugu(identifier) {
        Some(entry) => entry.english.clone(),
        None => identifier.to_string(),
    }
}

/// Resolve against the index if it loaded, else pass the identifier through
fn name_or_fallback(index: &Result<Arc<BooksIndex>, FetchError>, identifier: &str) -> String {
    match index {
        Ok(index) => resolve_name(index, identifier),
        Err(e) => {
            tracing::warn!("Name resolution for {:?} fell back to input: {}", identifier, e);
            identifier.to_string()
        }
    }
}

/// Resolution pipeline over a document source
pub struct Resolver {
    source: Arc<dyn DocumentSource>,
    metadata: MetadataCache,
}

impl Resolver {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            metadata: MetadataCache::new(source.clone()),
            source,
        }
    }

    pub fn metadata(&self) -> &MetadataCache {
        &self.metadata
    }

    /// All books in dataset order
    pub async fn books(&self) -> Result<Vec<BookEntry>, FetchError> {
        let index = self.metadata.index().await?;
        Ok(index.entries().to_vec())
    }

    /// Resolve an identifier to a candidate English key. Never fails.
    ///
    /// If the books index cannot be loaded the identifier is used as is.
    pub async fn resolve(&self, identifier: &str) -> String {
        let index = self.metadata.index().await;
        name_or_fallback(&index, identifier)
    }

    /// Full content of a book
    pub async fn resolve_book(&self, identifier: &str) -> ResolveResult<BookContent> {
        let key = self.resolve_key(identifier).await?;
        self.fetch_content(&key).await
    }

    /// Verses of one chapter
    pub async fn resolve_chapter(&self, identifier: &str, chapter: &str) -> ResolveResult<Vec<Verse>> {
        let content = self.resolve_book(identifier).await?;
        let chapter_data = content
            .into_chapter(chapter)
            .ok_or_else(|| Missing::Chapter(chapter.to_string()))?;
        Ok(chapter_data.verses)
    }

    /// A single verse
    pub async fn resolve_verse(
        &self,
        identifier: &str,
        chapter: &str,
        verse: &str,
    ) -> ResolveResult<Verse> {
        let content = self.resolve_book(identifier).await?;
        let chapter_data = content
            .into_chapter(chapter)
            .ok_or_else(|| Missing::Chapter(chapter.to_string()))?;
        let verse_data = chapter_data
            .into_verse(verse)
            .ok_or_else(|| Missing::Verse(verse.to_string()))?;
        Ok(verse_data)
    }

    /// Resolve the name and look the book up in the index.
    ///
    /// Returns the English name with the index's casing, which is also the
    /// content document name.
    async fn resolve_key(&self, identifier: &str) -> ResolveResult<String> {
        let index = self.metadata.index().await;
        let candidate = name_or_fallback(&index, identifier);

        let index = index?;
        match index.find_by_english(&candidate) {
            Some(entry) => Ok(entry.english.clone()),
            None => {
                tracing::debug!("Book {:?} (from {:?}) is not in the index", candidate, identifier);
                Err(Missing::Book.into())
            }
        }
    }

    async fn fetch_content(&self, key: &str) -> ResolveResult<BookContent> {
        let document = self.source.fetch(&Document::Book(key.to_string())).await?;

        if document.is_null() {
            return Err(Missing::BookContent.into());
        }

        serde_json::from_value(document).map_err(|e| {
            ResolveError::Fetch(FetchError::new(
                DocumentKind::Content,
                format!("unexpected document shape for {}: {}", key, e),
            ))
        })
    }
}

//! Metadata cache
//!
//! Holds the books index for the lifetime of the process. The index is
//! fetched on first use and never refreshed.
//!
//! # Concurrency
//!
//! Population goes through `tokio::sync::OnceCell`, so concurrent first
//! callers share a single in-flight fetch. A failed fetch leaves the cell
//! empty and the next caller tries again.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::source::{Document, DocumentKind, DocumentSource, FetchError};

use super::types::BooksIndex;

/// Populate-once cache of the books index
pub struct MetadataCache {
    source: Arc<dyn DocumentSource>,
    index: OnceCell<Arc<BooksIndex>>,
}

impl MetadataCache {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            index: OnceCell::new(),
        }
    }

    /// Get the books index, fetching it on first use
    pub async fn index(&self) -> Result<Arc<BooksIndex>, FetchError> {
        self.index
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    /// Whether the index has been populated
    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    async fn load(&self) -> Result<Arc<BooksIndex>, FetchError> {
        tracing::debug!("Loading books metadata");
        let document = self.source.fetch(&Document::Metadata).await?;

        let index = BooksIndex::from_document(document).map_err(|e| {
            FetchError::new(
                DocumentKind::Metadata,
                format!("unexpected document shape: {}", e),
            )
        })?;

        tracing::info!("Cached books metadata ({} books)", index.len());
        Ok(Arc::new(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetches_once() {
        let source = Arc::new(MemorySource::sample());
        let cache = MetadataCache::new(source.clone());
        assert!(!cache.is_loaded());

        let first = cache.index().await.unwrap();
        let second = cache.index().await.unwrap();
        let third = cache.index().await.unwrap();

        assert!(cache.is_loaded());
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(first.len(), 2);
        assert_eq!(source.metadata_fetches(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_access_fetches_once() {
        let source = Arc::new(MemorySource::sample().with_delay(Duration::from_millis(50)));
        let cache = Arc::new(MetadataCache::new(source.clone()));

        let tasks = (0..16).map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.index().await })
        });
        let results = futures::future::join_all(tasks).await;

        for result in results {
            assert_eq!(result.unwrap().unwrap().len(), 2);
        }
        assert_eq!(source.metadata_fetches(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let source = Arc::new(MemorySource::sample().with_failure("Books.json"));
        let cache = MetadataCache::new(source.clone());

        let err = cache.index().await.unwrap_err();
        assert_eq!(err.document, DocumentKind::Metadata);
        assert!(!cache.is_loaded());

        assert!(cache.index().await.is_err());
        assert_eq!(source.metadata_fetches(), 2);
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_metadata_error() {
        let source = Arc::new(MemorySource::new().with_document("Books.json", json!({"books": []})));
        let cache = MetadataCache::new(source);

        let err = cache.index().await.unwrap_err();
        assert_eq!(err.document, DocumentKind::Metadata);
        assert!(err.reason.starts_with("unexpected document shape"));
    }
}

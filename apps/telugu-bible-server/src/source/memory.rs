//! In-memory document source for tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Document, DocumentKind, DocumentSource, FetchError};

/// Serves documents from a map keyed by file name and counts fetches
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    metadata_fetches: AtomicUsize,
    content_fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small dataset with Genesis and Exodus
    pub fn sample() -> Self {
        Self::new()
            .with_document(
                "Books.json",
                json!([
                    {"book": {"english": "Genesis", "telugu": "ఆదికాండము"}},
                    {"book": {"english": "Exodus", "telugu": "నిర్గమకాండము"}}
                ]),
            )
            .with_document(
                "Genesis.json",
                json!({
                    "chapters": [
                        {
                            "chapter": "1",
                            "verses": [
                                {"verse": "1", "text": "In the beginning..."},
                                {"verse": "2", "text": "And the earth was without form..."}
                            ]
                        },
                        {
                            "chapter": "2",
                            "verses": [
                                {"verse": "1", "text": "Thus the heavens and the earth were finished..."}
                            ]
                        }
                    ]
                }),
            )
            .with_document(
                "Exodus.json",
                json!({
                    "chapters": [
                        {
                            "chapter": "01",
                            "verses": [{"verse": "01", "text": "Now these are the names..."}]
                        }
                    ]
                }),
            )
    }

    pub fn with_document(mut self, file_name: &str, value: Value) -> Self {
        self.documents.insert(file_name.to_string(), value);
        self
    }

    /// Make every fetch of `file_name` fail
    pub fn with_failure(mut self, file_name: &str) -> Self {
        self.failing.insert(file_name.to_string());
        self
    }

    /// Delay every fetch, to widen race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn metadata_fetches(&self) -> usize {
        self.metadata_fetches.load(Ordering::SeqCst)
    }

    pub fn content_fetches(&self) -> usize {
        self.content_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn fetch(&self, document: &Document) -> Result<Value, FetchError> {
        match document.kind() {
            DocumentKind::Metadata => self.metadata_fetches.fetch_add(1, Ordering::SeqCst),
            DocumentKind::Content => self.content_fetches.fetch_add(1, Ordering::SeqCst),
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let file_name = document.file_name();
        if self.failing.contains(&file_name) {
            return Err(FetchError::new(document.kind(), "connection reset"));
        }

        self.documents
            .get(&file_name)
            .cloned()
            .ok_or_else(|| FetchError::new(document.kind(), format!("{} returned 404 Not Found", file_name)))
    }
}

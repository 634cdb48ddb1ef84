//! HTTP document source backed by `reqwest`

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::SourceConfig;

use super::{Document, DocumentSource, FetchError};

/// Fetches documents from a fixed base origin over HTTP
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a new source from configuration
    pub fn new(config: &SourceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a document. The file name is encoded as one path segment.
    pub fn url_for(&self, document: &Document) -> String {
        format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(&document.file_name())
        )
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, document: &Document) -> Result<Value, FetchError> {
        let url = self.url_for(document);
        let kind = document.kind();
        tracing::debug!("Fetching {} from {}", kind, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::new(kind, format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(kind, format!("{} returned {}", url, status)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::new(kind, format!("invalid JSON from {}: {}", url, e)))
    }
}

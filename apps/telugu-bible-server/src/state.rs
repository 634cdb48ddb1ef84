//! Application state management

use std::sync::Arc;

use crate::catalog::Resolver;
use crate::config::Config;
use crate::source::{DocumentSource, HttpSource};

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    resolver: Resolver,
}

impl AppState {
    /// Create the state with an HTTP source for the configured origin
    pub fn new(config: Config) -> Result<Self, StateError> {
        let source = HttpSource::new(&config.source)?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Create the state over an arbitrary document source
    pub fn with_source(config: Config, source: Arc<dyn DocumentSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                resolver: Resolver::new(source),
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the resolver
    pub fn resolver(&self) -> &Resolver {
        &self.inner.resolver
    }
}

//! Configuration management for the Telugu Bible server

use std::env;

/// Default origin serving `Books.json` and the per-book documents
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/Telugu-Bible/all-books/main";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote dataset settings
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base origin, without a trailing slash
    pub base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            source: SourceConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            base_url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("telugu-bible-server/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Build the configuration from process environment variables.
    ///
    /// Missing or invalid values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT {:?}, using {}", raw, defaults.server.port);
                defaults.server.port
            }),
            None => defaults.server.port,
        };

        let base_url = match lookup("BIBLE_SOURCE_URL") {
            Some(raw) if !raw.trim().trim_end_matches('/').is_empty() => {
                raw.trim().trim_end_matches('/').to_string()
            }
            Some(_) => {
                tracing::warn!("Empty BIBLE_SOURCE_URL, using {}", defaults.source.base_url);
                defaults.source.base_url
            }
            None => defaults.source.base_url,
        };

        Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port,
            },
            source: SourceConfig {
                base_url,
                user_agent: lookup("BIBLE_USER_AGENT").unwrap_or(defaults.source.user_agent),
            },
        }
    }
}

//! Resolution errors

use thiserror::Error;

use crate::source::FetchError;

/// What was missing when a lookup came up empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    #[error("Book not found")]
    Book,

    #[error("Book content not found")]
    BookContent,

    #[error("Chapter {0} not found")]
    Chapter(String),

    #[error("Verse {0} not found")]
    Verse(String),
}

/// Outcome of a failed resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    NotFound(Missing),
}

impl From<Missing> for ResolveError {
    fn from(missing: Missing) -> Self {
        ResolveError::NotFound(missing)
    }
}

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

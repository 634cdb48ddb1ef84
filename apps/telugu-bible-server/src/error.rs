//! Error types for the Telugu Bible server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::ResolveError;
use crate::source::FetchError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The dataset could not be fetched. `message` is what the client sees.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        source: FetchError,
    },
}

impl AppError {
    /// Map a resolution failure, using `message` if the dataset was unreachable
    pub fn from_resolve(err: ResolveError, message: &'static str) -> Self {
        match err {
            ResolveError::NotFound(missing) => AppError::NotFound(missing.to_string()),
            ResolveError::Fetch(source) => AppError::Upstream { message, source },
        }
    }

    pub fn upstream(source: FetchError, message: &'static str) -> Self {
        AppError::Upstream { message, source }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

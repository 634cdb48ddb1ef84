//! Telugu Bible Server Library
//!
//! Read-only HTTP API over the Telugu Bible dataset: a books index
//! (`Books.json`) and one JSON document per book, hosted on a remote origin.
//! The server binary is in main.rs.
//!
//! # Modules
//!
//! - `source`: fetching dataset documents
//! - `catalog`: dataset types, the books index cache and book/chapter/verse resolution
//! - `routes`: HTTP handlers

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod source;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .nest("/books", routes::books::router())
        .fallback(routes::root::api_not_found);

    Router::new()
        .route("/", get(routes::root::index))
        .nest("/health", routes::health::router())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

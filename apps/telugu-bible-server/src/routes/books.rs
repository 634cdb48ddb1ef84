//! Book, chapter and verse routes
//!
//! Books may be addressed by English name (any case) or Telugu name.

use axum::{
    extract::{Path, State},
    routing::{get, MethodRouter},
    Json, Router,
};

use crate::catalog::{BookContent, BookEntry, Verse};
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::root::api_not_found;

/// Create the books router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", only_get(get(list_books)))
        .route("/:book_name", only_get(get(get_book)))
        .route("/:book_name/:chapter", only_get(get(get_chapter)))
        .route("/:book_name/:chapter/:verse", only_get(get(get_verse)))
}

/// Other methods on a known path get the API 404, not a 405
fn only_get(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(api_not_found)
}

/// List all books with their English and Telugu names
async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookEntry>>> {
    let books = state
        .resolver()
        .books()
        .await
        .map_err(|e| AppError::upstream(e, "Failed to fetch books metadata"))?;
    Ok(Json(books))
}

/// Full content of a book
async fn get_book(
    State(state): State<AppState>,
    Path(book_name): Path<String>,
) -> Result<Json<BookContent>> {
    let content = state
        .resolver()
        .resolve_book(&book_name)
        .await
        .map_err(|e| AppError::from_resolve(e, "Failed to fetch book content"))?;
    Ok(Json(content))
}

/// Verses of a chapter
async fn get_chapter(
    State(state): State<AppState>,
    Path((book_name, chapter)): Path<(String, String)>,
) -> Result<Json<Vec<Verse>>> {
    let verses = state
        .resolver()
        .resolve_chapter(&book_name, &chapter)
        .await
        .map_err(|e| AppError::from_resolve(e, "Failed to fetch chapter content"))?;
    Ok(Json(verses))
}

/// A single verse
async fn get_verse(
    State(state): State<AppState>,
    Path((book_name, chapter, verse)): Path<(String, String, String)>,
) -> Result<Json<Verse>> {
    let verse = state
        .resolver()
        .resolve_verse(&book_name, &chapter, &verse)
        .await
        .map_err(|e| AppError::from_resolve(e, "Failed to fetch verse content"))?;
    Ok(Json(verse))
}

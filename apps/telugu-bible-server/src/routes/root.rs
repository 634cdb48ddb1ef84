//! API index and the `/api` catch-all

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIndex {
    pub message: &'static str,
    pub available_endpoints: Vec<Endpoint>,
}

#[derive(Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const ENDPOINTS: [(&str, &str); 4] = [
    ("/api/books", "Returns a list of all books (English and Telugu names)"),
    (
        "/api/books/:bookName",
        "Returns the content (chapters and verses) of a specific book",
    ),
    (
        "/api/books/:bookName/:chapter",
        "Returns all verses for a specific chapter in a book",
    ),
    (
        "/api/books/:bookName/:chapter/:verse",
        "Returns a specific verse from a chapter of a book",
    ),
];

/// Static listing of the available endpoints
pub async fn index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "Welcome to the Telugu Bible API!",
        available_endpoints: ENDPOINTS
            .iter()
            .map(|&(path, description)| Endpoint {
                method: "GET",
                path,
                description,
            })
            .collect(),
    })
}

#[derive(Serialize)]
pub struct NotFoundBody {
    pub error: &'static str,
}

/// Response for any unmatched `/api` request
pub async fn api_not_found() -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "API endpoint not found",
        }),
    )
}

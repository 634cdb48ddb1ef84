//! Health check endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Whether the books index has been loaded yet
    pub metadata_cached: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "telugu-bible-server",
        metadata_cached: state.resolver().metadata().is_loaded(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use crate::config::Config;
    use crate::source::memory::MemorySource;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_health_reports_cache_state() {
        let state = AppState::with_source(Config::default(), Arc::new(MemorySource::sample()));
        let server = TestServer::new(crate::app(state)).unwrap();

        let body = server.get("/health").await.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "telugu-bible-server");
        assert_eq!(body["metadata_cached"], false);

        server.get("/api/books").await.assert_status_ok();

        let body = server.get("/health").await.json::<serde_json::Value>();
        assert_eq!(body["metadata_cached"], true);
    }
}

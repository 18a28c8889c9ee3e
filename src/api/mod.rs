//! HTTP surface for the place lookup service.
//!
//! The router serves the JSON API, the landing page at `/`, and the page's
//! assets under `/static`.

pub mod handlers;
pub mod service;

pub use service::PlaceService;

use axum::{routing::get, Router};
use handlers::AppState;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// `ui_dir` holds the landing document (`index.html`) and its script; a
/// missing landing document answers 404.
pub fn router(service: AppState, ui_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/places", get(handlers::get_places))
        .route("/api/stats", get(handlers::get_stats))
        .route_service("/", ServeFile::new(ui_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(ui_dir))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{LoadOutcome, LoadSummary};
    use crate::models::PlaceRecord;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn place(name: &str, latitude: f64, longitude: f64) -> PlaceRecord {
        PlaceRecord {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    fn test_app(service: PlaceService) -> Router {
        router(Arc::new(service), Path::new("ui"))
    }

    fn loaded_app() -> Router {
        test_app(PlaceService::from_table(vec![
            place("paris", 48.85, 2.35),
            place("tripoli", 32.88, 13.19),
        ]))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn places_returns_matching_coordinates() {
        let (status, body) = get_json(loaded_app(), "/api/places?ending=s").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([[48.85, 2.35]]));
    }

    #[tokio::test]
    async fn places_with_no_matches_is_an_empty_array() {
        let (status, body) = get_json(loaded_app(), "/api/places?ending=ville").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn absent_or_empty_ending_is_an_empty_array() {
        let (status, body) = get_json(loaded_app(), "/api/places").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let (status, body) = get_json(loaded_app(), "/api/places?ending=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn missing_dataset_is_a_500() {
        let app = test_app(PlaceService::new(
            LoadOutcome::Failed("no file".to_string()),
            LoadSummary::default(),
        ));
        let (status, body) = get_json(app, "/api/places?ending=s").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Data not loaded"}));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get_json(loaded_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn stats_report_the_load_state() {
        let (status, body) = get_json(loaded_app(), "/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "loaded");
        assert_eq!(body["places"], 2);
    }

    #[tokio::test]
    async fn landing_page_is_served_from_the_ui_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html>").unwrap();
        let app = router(
            Arc::new(PlaceService::from_table(vec![place("x", 1.0, 2.0)])),
            dir.path(),
        );
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_landing_page_is_a_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(
            Arc::new(PlaceService::from_table(vec![place("x", 1.0, 2.0)])),
            dir.path(),
        );
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

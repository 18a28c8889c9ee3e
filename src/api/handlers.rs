//! REST handlers for the place lookup API.
//!
//! Handlers share one read-only `PlaceService` via axum state.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::service::{PlaceService, ServiceStats};

pub type AppState = Arc<PlaceService>;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize)]
pub struct EndingQuery {
    pub ending: Option<String>,
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/places?ending=X
///
/// Responds with a JSON array of `[latitude, longitude]` pairs. An absent
/// or empty `ending` yields `[]`; a missing dataset yields a 500 with an
/// error body, which callers can tell apart from zero matches.
pub async fn get_places(
    State(service): State<AppState>,
    Query(params): Query<EndingQuery>,
) -> Result<Json<Vec<[f64; 2]>>, (StatusCode, Json<ErrorResponse>)> {
    let ending = params.ending.unwrap_or_default();
    match service.query_by_ending(&ending) {
        Ok(coords) => Ok(Json(coords)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// GET /api/stats
pub async fn get_stats(State(service): State<AppState>) -> Json<ServiceStats> {
    Json(service.stats())
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use nb_core::BriefingStore;

use crate::AppState;

#[derive(Deserialize)]
pub struct NewsParams {
    pub company: String,
}

/// Run the full pipeline for a company and return the briefing.
/// "Company not found" and "no news" are 200s with the corresponding
/// fields, matching the pipeline's non-fatal treatment of both.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsParams>,
) -> impl IntoResponse {
    match state.processor.process(&params.company).await {
        Ok(briefing) => (StatusCode::OK, Json(briefing)).into_response(),
        Err(e) => {
            error!("briefing failed for {}: {e}", params.company);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

fn default_min_score() -> f64 {
    -1.0
}

fn default_max_score() -> f64 {
    1.0
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
}

/// Query previously processed briefings by summary keyword and sentiment
/// score range.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let store = state.processor.store();
    match store
        .query(&params.keyword, params.min_score, params.max_score)
        .await
    {
        Ok(briefings) => (StatusCode::OK, Json(briefings)).into_response(),
        Err(e) => {
            error!("store query failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

/// Serve one generated audio artifact by name.
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    if !is_safe_name(&name) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid audio name"})),
        )
            .into_response();
    }

    let path = state.audio_dir.join(&name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "audio file not found"})),
        )
            .into_response(),
    }
}

/// Artifact names are flat file names; anything that could escape the
/// audio directory is rejected.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

use anyhow::Result;
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use lse_core::{make_index, KeywordIndex, Occurrence, SearchConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
    /// Defaults to the configured limit.
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: [String; 2],
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub keywords: usize,
}

/// The index is sealed before the server starts, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<KeywordIndex>,
    pub config: SearchConfig,
}

/// Indexes the corpus named by `docs_file` and returns the router serving it.
pub fn build_app(docs_file: &str, noise_file: &str) -> Result<Router> {
    let index = make_index(docs_file, noise_file)?;
    tracing::info!(documents = index.document_count(), keywords = index.len(), "index loaded");
    Ok(build_app_with_index(index))
}

pub fn build_app_with_index(index: KeywordIndex) -> Router {
    let app_state = AppState { index: Arc::new(index), config: SearchConfig::default() };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let k = params.k.unwrap_or(state.config.limit).clamp(1, MAX_K);
    let results = state.index.top_k(&params.kw1, &params.kw2, k);
    let elapsed = start.elapsed();
    tracing::debug!(kw1 = %params.kw1, kw2 = %params.kw2, hits = results.len(), "search");
    Json(SearchResponse {
        query: [params.kw1, params.kw2],
        took_s: elapsed.as_secs_f64(),
        total_hits: results.len(),
        results,
    })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(keyword): Path<String>) -> Result<Json<KeywordResponse>, (StatusCode, String)> {
    let keyword = keyword.to_lowercase();
    let occurrences = state.index.occurrences(&keyword);
    if occurrences.is_empty() {
        return Err((StatusCode::NOT_FOUND, format!("keyword not indexed: {keyword}")));
    }
    Ok(Json(KeywordResponse { occurrences: occurrences.to_vec(), keyword }))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { documents: state.index.document_count(), keywords: state.index.len() })
}

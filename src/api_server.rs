// Axum API server module.
//
// Thin HTTP surface over the pure scoring engine. Scoring is deterministic,
// so responses are cached in Moka keyed by the canonical pair id plus both
// birth years.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use std::time::Duration;

#[cfg(feature = "api")]
use serde::Deserialize;

#[cfg(feature = "api")]
use crate::context::Profile;

#[cfg(feature = "api")]
use crate::error::EngineError;

#[cfg(feature = "api")]
use crate::overrides::pair_key;

#[cfg(feature = "api")]
use crate::scorer::MatchScorer;

#[cfg(feature = "api")]
use crate::signs::{LunarAnimal, SolarSign};

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<MatchScorer>,
    pub cache: Cache<String, serde_json::Value>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(scorer: MatchScorer) -> Self {
        tracing::info!("Initializing Moka response cache...");
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            scorer: Arc::new(scorer),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Scoring endpoints (JSON API)
        .route("/api/match", get(score_match))
        .route("/api/matrix/:sign/:animal", get(score_matrix))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Errors
// ============================================================================

#[cfg(feature = "api")]
pub enum AppError {
    InvalidInput(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Query params for a single match request.
#[cfg(feature = "api")]
#[derive(Debug, Deserialize)]
struct MatchQuery {
    sign_a: String,
    animal_a: String,
    year_a: i32,
    sign_b: String,
    animal_b: String,
    year_b: i32,
    /// Optional lively-pair chart flag.
    #[serde(default)]
    lively: bool,
}

#[cfg(feature = "api")]
async fn score_match(
    State(state): State<AppState>,
    Query(params): Query<MatchQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sign_a: SolarSign = params.sign_a.parse()?;
    let animal_a: LunarAnimal = params.animal_a.parse()?;
    let sign_b: SolarSign = params.sign_b.parse()?;
    let animal_b: LunarAnimal = params.animal_b.parse()?;

    // Deterministic engine: cache on the canonical pair id + years + flag.
    let cache_key = format!(
        "match:{}:{}:{}:{}",
        pair_key(sign_a, animal_a, sign_b, animal_b),
        params.year_a.min(params.year_b),
        params.year_a.max(params.year_b),
        params.lively,
    );

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let result = state.scorer.evaluate_with_flags(
        Profile::new(sign_a, animal_a, params.year_a),
        Profile::new(sign_b, animal_b, params.year_b),
        params.lively,
    );

    let body =
        serde_json::to_value(&result).map_err(|e| AppError::Internal(e.to_string()))?;
    state.cache.insert(cache_key, body.clone()).await;

    Ok(Json(body))
}

/// Query params for the matrix endpoint.
#[cfg(feature = "api")]
#[derive(Debug, Deserialize)]
struct MatrixQuery {
    /// Viewer birth year.
    year: i32,
    /// Partner birth year used for every cell; defaults to the viewer's.
    partner_year: Option<i32>,
}

#[cfg(feature = "api")]
async fn score_matrix(
    State(state): State<AppState>,
    Path((sign, animal)): Path<(String, String)>,
    Query(params): Query<MatrixQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sign: SolarSign = sign.parse()?;
    let animal: LunarAnimal = animal.parse()?;
    let partner_year = params.partner_year.unwrap_or(params.year);

    let cache_key = format!(
        "matrix:{}:{}:{}:{}",
        sign, animal, params.year, partner_year
    );
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Ok(Json(cached));
    }

    let viewer = Profile::new(sign, animal, params.year);
    let cells = state.scorer.score_matrix(viewer, partner_year);

    let body = serde_json::json!({
        "viewer": { "sign": sign, "animal": animal, "year": params.year },
        "cells": cells.len(),
        "data": cells,
    });
    state.cache.insert(cache_key, body.clone()).await;

    Ok(Json(body))
}

// Axum API Server Module
//
// Purpose: read-only JSON API over the embedded catalog and the recommender,
// for presentation layers (wizard UI, charts, scheme listing).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use anyhow::Context;

use crate::catalog::{Catalog, Language};
use crate::config::ServerConfig;
use crate::profit::compute_profit_loss;
use crate::recommender::{recommend_batch, recommend_with_profit, FarmerInput, Recommendation};
use crate::utils::format_inr;

/// Upper bound on inputs accepted by the batch endpoint
const MAX_BATCH_INPUTS: usize = 100;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    /// Recommendation responses keyed by input + language
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Validating embedded catalog...");
        let catalog = Catalog::global();
        catalog
            .validate()
            .context("Embedded catalog failed validation")?;
        tracing::info!(
            "Catalog ready: {} crops, {} districts, {} schemes",
            catalog.crops().len(),
            catalog.districts().len(),
            catalog.schemes().len()
        );

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self { catalog, cache })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Catalog endpoints
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:id", get(get_crop))
        .route("/api/districts", get(list_districts))
        .route("/api/schemes", get(list_schemes))

        // Recommendation endpoints
        .route("/api/recommendations", get(get_recommendations))
        .route("/api/recommendations/batch", post(get_recommendations_batch))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

/// Query string for `/api/recommendations`. Missing tags match no crop.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationQuery {
    #[serde(default)]
    district: String,
    #[serde(default)]
    soil_type: String,
    #[serde(default)]
    water_availability: String,
    #[serde(default)]
    season: String,
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BatchRequest {
    inputs: Vec<FarmerInput>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops(State(state): State<AppState>) -> Json<serde_json::Value> {
    let crops = state.catalog.crops();
    Json(serde_json::json!({
        "rows": crops.len(),
        "data": crops,
    }))
}

async fn get_crop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = state
        .catalog
        .crop(&id)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", id)))?;

    Ok(Json(serde_json::json!({
        "crop": crop,
        "profit": compute_profit_loss(crop),
    })))
}

async fn list_districts(State(state): State<AppState>) -> Json<serde_json::Value> {
    let districts = state.catalog.districts();
    Json(serde_json::json!({
        "rows": districts.len(),
        "data": districts,
    }))
}

async fn list_schemes(State(state): State<AppState>) -> Json<serde_json::Value> {
    let schemes = state.catalog.schemes();
    Json(serde_json::json!({
        "rows": schemes.len(),
        "data": schemes,
    }))
}

async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let lang = parse_language(query.lang.as_deref())?;
    let input = FarmerInput {
        district: query.district,
        soil_type: query.soil_type,
        water_availability: query.water_availability,
        season: query.season,
    };

    let cache_key = format!("recommend:{:?}:{}", input, lang);

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(Json(cached));
    }

    let ranked = recommend_with_profit(state.catalog, &input);
    let result = serde_json::json!({
        "district": input.district,
        "districtName": state.catalog.district_name(&input.district, lang),
        "rows": ranked.len(),
        "data": recommendations_json(&ranked, lang),
    });

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn get_recommendations_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if request.inputs.len() > MAX_BATCH_INPUTS {
        return Err(AppError::BadRequest(format!(
            "Batch of {} inputs exceeds limit of {}",
            request.inputs.len(),
            MAX_BATCH_INPUTS
        )));
    }

    let start = std::time::Instant::now();
    let batches = recommend_batch(state.catalog, &request.inputs);
    tracing::debug!(
        "Batch of {} recommendations computed in {:?}",
        batches.len(),
        start.elapsed()
    );

    let data: Vec<serde_json::Value> = batches
        .iter()
        .map(|ranked| recommendations_json(ranked, Language::En))
        .collect();

    Ok(Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    })))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_language(raw: Option<&str>) -> Result<Language, AppError> {
    match raw {
        None => Ok(Language::default()),
        Some(tag) => tag
            .parse()
            .map_err(|e: crate::error::CatalogError| AppError::BadRequest(e.to_string())),
    }
}

fn recommendations_json(ranked: &[Recommendation<'_>], lang: Language) -> serde_json::Value {
    let items: Vec<serde_json::Value> = ranked
        .iter()
        .map(|rec| {
            serde_json::json!({
                "crop": rec.crop,
                "name": rec.crop.name.get(lang),
                "profit": rec.profit,
                "isProfit": rec.profit.is_profit(),
                "netProfitFormatted": format_inr(rec.profit.net_profit.abs()),
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

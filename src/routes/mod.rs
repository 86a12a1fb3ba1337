use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    models::StatusResponse,
    services::{
        providers::{PosterProvider, TmdbPosterProvider},
        RecommendationEngine,
    },
};

pub mod recommend;

/// Shared, read-only collaborators of the request handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub posters: Arc<dyn PosterProvider>,
}

impl AppState {
    pub fn new(engine: RecommendationEngine, posters: Arc<dyn PosterProvider>) -> Self {
        Self {
            engine: Arc::new(engine),
            posters,
        }
    }

    /// Wires the Together engine and TMDB poster provider from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RecommendationEngine::from_config(config),
            Arc::new(TmdbPosterProvider::from_config(config)),
        )
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/recommend", post(recommend::recommend))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// Landing endpoint confirming the backend is up
async fn home() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "VibeAlchemy Brain is Active 🧠".to_string(),
        message: "The UI is in your Chrome Extension. backend is running.".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

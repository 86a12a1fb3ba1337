use axum::{extract::State, Extension, Json};

use crate::{
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    routes::AppState,
    services::recommendations,
};

/// Handler for the recommendation endpoint
///
/// Always answers with a full list; failures inside the pipeline surface as fallback
/// catalogs and placeholder posters rather than error statuses.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let vibe = request.vibe.as_deref();

    tracing::info!(
        request_id = %request_id,
        vibe = vibe.unwrap_or_default(),
        "Processing recommendation request"
    );

    let movies =
        recommendations::get_recommendations(&state.engine, state.posters.clone(), vibe).await;

    tracing::info!(
        request_id = %request_id,
        count = movies.len(),
        "Recommendation request completed"
    );

    Json(RecommendationResponse { movies })
}

use axum::{
    extract::{Path, State},
    Json,
};
use pipeline::RecommendedMovie;
use serde_json::{json, Value};

use crate::error::ApiResult;

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Recommend one movie for a user
pub async fn recommend(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<RecommendedMovie>> {
    let selection = state.orchestrator.recommend(&user_id).await?;
    Ok(Json(RecommendedMovie::from(&selection)))
}

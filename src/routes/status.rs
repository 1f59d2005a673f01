use axum::{extract::State, Json};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{app_state::AppState, domain::ApiError, routes::MessageResponse};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("LAMFO API is running"))
}

/// Reports which backend is serving and whether it is the fallback.
#[tracing::instrument(name = "Health check route handler", skip_all)]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let engine = state
        .database
        .get_engine()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(eyre!(e)))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_owned(),
        database: engine.backend().name().to_owned(),
        fallback: engine.is_fallback(),
    }))
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub fallback: bool,
}

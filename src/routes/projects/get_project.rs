use axum::{
    extract::{Path, State},
    Json,
};

use super::PROJECT_NOT_FOUND;
use crate::{
    app_state::AppState,
    domain::{ApiError, ProjectId},
    routes::ProjectResponse,
};

#[tracing::instrument(name = "Get project route handler", skip_all)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state
        .project_store
        .get_project(ProjectId::new(project_id))
        .await?
        .ok_or_else(|| ApiError::NotFound(PROJECT_NOT_FOUND.to_owned()))?;

    Ok(Json(project.into()))
}

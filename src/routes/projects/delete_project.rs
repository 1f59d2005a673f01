use axum::{
    extract::{Path, State},
    Json,
};

use super::PROJECT_NOT_FOUND;
use crate::{
    app_state::AppState,
    domain::{ApiError, ProjectId},
    routes::MessageResponse,
};

#[tracing::instrument(name = "Delete project route handler", skip_all)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state
        .project_store
        .delete_project(ProjectId::new(project_id))
        .await?
    {
        return Err(ApiError::NotFound(PROJECT_NOT_FOUND.to_owned()));
    }

    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

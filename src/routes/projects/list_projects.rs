use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    app_state::AppState,
    domain::{ApiError, Pagination},
    routes::{PageQueryParams, ProjectResponse},
};

#[tracing::instrument(name = "List projects route handler", skip_all)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<PageQueryParams>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let page = Pagination::parse(params.skip, params.limit)?;

    let projects = state.project_store.list_projects(page).await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::{
    parse_demo_url, parse_github_url, parse_status, to_member_ids,
    PROJECT_NOT_FOUND,
};
use crate::{
    app_state::AppState,
    domain::{ApiError, ProjectChanges, ProjectId, ProjectTitle, ValidationError},
    routes::ProjectResponse,
    utils::patch::{double_option, parse_nullable},
};

#[tracing::instrument(name = "Update project route handler", skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let changes = request.parse()?;

    let project = state
        .project_store
        .update_project(ProjectId::new(project_id), changes)
        .await?
        .ok_or_else(|| ApiError::NotFound(PROJECT_NOT_FOUND.to_owned()))?;

    Ok(Json(project.into()))
}

/// `member_ids`, when present, replaces the membership set. `null` there is
/// treated like an empty list.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub demo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub member_ids: Option<Option<Vec<i64>>>,
}

impl UpdateProjectRequest {
    pub fn parse(self) -> Result<ProjectChanges, ValidationError> {
        Ok(ProjectChanges {
            title: self.title.map(ProjectTitle::parse).transpose()?,
            description: self.description,
            status: parse_nullable(self.status, parse_status)?,
            github_url: parse_nullable(self.github_url, parse_github_url)?,
            demo_url: parse_nullable(self.demo_url, parse_demo_url)?,
            member_ids: self
                .member_ids
                .map(|ids| to_member_ids(ids.unwrap_or_default())),
        })
    }
}

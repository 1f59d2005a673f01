use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::{parse_demo_url, parse_github_url, parse_status, to_member_ids};
use crate::{
    app_state::AppState,
    domain::{ApiError, NewProject, ProjectTitle, ValidationError},
    routes::ProjectResponse,
};

#[tracing::instrument(name = "Create project route handler", skip_all)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    let project = request.parse()?;

    let created = state.project_store.create_project(project).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `status` falls back to "active" when omitted. An explicit `null` stores
/// no status at all.
#[derive(Debug, PartialEq, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<i64>,
}

fn default_status() -> Option<String> {
    Some(crate::domain::DEFAULT_PROJECT_STATUS.to_owned())
}

impl CreateProjectRequest {
    pub fn parse(self) -> Result<NewProject, ValidationError> {
        let mut project = NewProject::new(ProjectTitle::parse(self.title)?);
        project.description = self.description;
        project.status = self.status.map(parse_status).transpose()?;
        project.github_url = self.github_url.map(parse_github_url).transpose()?;
        project.demo_url = self.demo_url.map(parse_demo_url).transpose()?;
        project.member_ids = to_member_ids(self.member_ids);
        Ok(project)
    }
}

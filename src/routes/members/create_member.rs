use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::{
    parse_github_username, parse_linkedin_url, parse_role,
    EMAIL_ALREADY_REGISTERED,
};
use crate::{
    app_state::AppState,
    domain::{ApiError, Email, MemberName, NewMember, StoreError, ValidationError},
    routes::MemberResponse,
};

#[tracing::instrument(name = "Create member route handler", skip_all)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member = request.parse()?;

    if state
        .member_store
        .get_member_by_email(&member.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(EMAIL_ALREADY_REGISTERED.to_owned()));
    }

    // A concurrent insert can still win the race; the unique index decides.
    let created = state.member_store.create_member(member).await.map_err(
        |e| match e {
            StoreError::ConstraintViolation(_) => {
                ApiError::Conflict(EMAIL_ALREADY_REGISTERED.to_owned())
            }
            e => e.into(),
        },
    )?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
}

impl CreateMemberRequest {
    pub fn parse(self) -> Result<NewMember, ValidationError> {
        let mut member = NewMember::new(
            MemberName::parse(self.name)?,
            Email::parse(self.email)?,
        );
        member.role = self.role.map(parse_role).transpose()?;
        member.bio = self.bio;
        member.github_username =
            self.github_username.map(parse_github_username).transpose()?;
        member.linkedin_url =
            self.linkedin_url.map(parse_linkedin_url).transpose()?;
        Ok(member)
    }
}

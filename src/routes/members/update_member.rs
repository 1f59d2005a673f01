use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use super::{
    parse_github_username, parse_linkedin_url, parse_role,
    EMAIL_ALREADY_REGISTERED, MEMBER_NOT_FOUND,
};
use crate::{
    app_state::AppState,
    domain::{
        ApiError, Email, MemberChanges, MemberId, MemberName, StoreError,
        ValidationError,
    },
    routes::MemberResponse,
    utils::patch::{double_option, parse_nullable},
};

#[tracing::instrument(name = "Update member route handler", skip_all)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let changes = request.parse()?;

    let member = state
        .member_store
        .update_member(MemberId::new(member_id), changes)
        .await
        .map_err(|e| match e {
            StoreError::ConstraintViolation(_) => {
                ApiError::Conflict(EMAIL_ALREADY_REGISTERED.to_owned())
            }
            e => e.into(),
        })?
        .ok_or_else(|| ApiError::NotFound(MEMBER_NOT_FOUND.to_owned()))?;

    Ok(Json(member.into()))
}

/// Fields left out are not touched. An explicit `null` clears the nullable
/// ones; on `name` and `email` it counts as left out.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct UpdateMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub github_username: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin_url: Option<Option<String>>,
}

impl UpdateMemberRequest {
    pub fn parse(self) -> Result<MemberChanges, ValidationError> {
        Ok(MemberChanges {
            name: self.name.map(MemberName::parse).transpose()?,
            email: self.email.map(Email::parse).transpose()?,
            role: parse_nullable(self.role, parse_role)?,
            bio: self.bio,
            github_username: parse_nullable(
                self.github_username,
                parse_github_username,
            )?,
            linkedin_url: parse_nullable(self.linkedin_url, parse_linkedin_url)?,
        })
    }
}

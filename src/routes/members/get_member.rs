use axum::{
    extract::{Path, State},
    Json,
};

use super::MEMBER_NOT_FOUND;
use crate::{
    app_state::AppState,
    domain::{ApiError, MemberId},
    routes::MemberResponse,
};

#[tracing::instrument(name = "Get member route handler", skip_all)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .member_store
        .get_member(MemberId::new(member_id))
        .await?
        .ok_or_else(|| ApiError::NotFound(MEMBER_NOT_FOUND.to_owned()))?;

    Ok(Json(member.into()))
}

use axum::{
    extract::{Path, State},
    Json,
};

use super::MEMBER_NOT_FOUND;
use crate::{
    app_state::AppState,
    domain::{ApiError, MemberId},
    routes::MessageResponse,
};

#[tracing::instrument(name = "Delete member route handler", skip_all)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state
        .member_store
        .delete_member(MemberId::new(member_id))
        .await?
    {
        return Err(ApiError::NotFound(MEMBER_NOT_FOUND.to_owned()));
    }

    Ok(Json(MessageResponse::new("Member deleted successfully")))
}

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    app_state::AppState,
    domain::{ApiError, Pagination},
    routes::{MemberResponse, PageQueryParams},
};

#[tracing::instrument(name = "List members route handler", skip_all)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<PageQueryParams>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let page = Pagination::parse(params.skip, params.limit)?;

    let members = state.member_store.list_members(page).await?;

    Ok(Json(members.into_iter().map(Into::into).collect()))
}

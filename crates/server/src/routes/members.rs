use axum::{
    extract::{Path, State},
    Form, Json,
};
use service::domain::Member;
use service::storage::Record;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.members.find_all().await)
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<u64>,
) -> Result<Json<Member>, JsonApiError> {
    match state.members.find_by_id(member_id).await {
        Some(member) => Ok(Json(member)),
        None => Err(JsonApiError::not_found(Member::ENTITY, member_id)),
    }
}

/// Save a member from form fields `username`, `age`.
pub async fn save_member(State(state): State<AppState>, Form(member): Form<Member>) -> Json<Member> {
    let saved = state.members.save(member).await;
    info!(member_id = ?saved.id, username = %saved.username, "member saved");
    Json(saved)
}

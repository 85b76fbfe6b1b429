//! Group handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::{GroupId, UserId};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::dto::groups::{AddMemberRequest, CreateGroupRequest, GroupResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::AppState;

/// Creates a group; the creator always becomes a member
pub async fn create_group(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    let request = validated(request)?;
    let group = state.service.create_group(request.into(), &user).await?;
    Ok((StatusCode::CREATED, Json(GroupResponse::from(group))))
}

/// Fetches a group; only members may see it
pub async fn get_group(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group = state.service.get_group(GroupId::from(id), &user).await?;
    Ok(Json(GroupResponse::from(group)))
}

/// Adds a member to a group
pub async fn add_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group = state
        .service
        .add_member(GroupId::from(id), UserId::from(request.user_id))
        .await?;
    Ok(Json(GroupResponse::from(group)))
}

//! User handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::Query;
use core_kernel::UserId;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::dto::users::{CreateUserRequest, ListUsersQuery, UserResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::AppState;

/// Registers a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let request = validated(request)?;
    let user = state.service.create_user(request.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Bulk lookup by `user_ids` query parameters
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let ids: Vec<UserId> = query.user_ids.into_iter().map(UserId::from).collect();
    let users = state.service.get_users(&ids).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// The authenticated user's own record
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

/// Fetches a user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.service.get_user(UserId::from(id)).await?;
    Ok(Json(UserResponse::from(user)))
}

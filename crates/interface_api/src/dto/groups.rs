//! Group DTOs

use core_kernel::{GroupId, UserId};
use domain_split::{CreateGroup, Group};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::users::UserResponse;

/// Request body for `POST /groups`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Initial member ids; the creator is always added
    #[serde(default)]
    pub members: Vec<Uuid>,
}

impl From<CreateGroupRequest> for CreateGroup {
    fn from(request: CreateGroupRequest) -> Self {
        CreateGroup {
            name: request.name,
            member_ids: request.members.into_iter().map(UserId::from).collect(),
        }
    }
}

/// Request body for `POST /groups/:id/members`
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

/// A group as returned by the API
#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<UserResponse>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        GroupResponse {
            id: group.id,
            name: group.name,
            members: group.members.into_iter().map(UserResponse::from).collect(),
        }
    }
}

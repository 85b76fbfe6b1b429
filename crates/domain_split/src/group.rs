//! Group entity

use core_kernel::{GroupId, UserId};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A group of users that share bills
///
/// Members arrive eagerly resolved from the store; the domain never triggers
/// follow-up fetches to materialize them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,
    /// Group name
    pub name: String,
    /// Member users, eagerly resolved
    pub members: Vec<User>,
}

impl Group {
    /// Returns true if the user is a member of this group
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.members.iter().any(|member| member.id == user_id)
    }

    /// Returns the member ids
    pub fn member_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.members.iter().map(|member| member.id)
    }
}

/// Data for creating a new group
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
    pub member_ids: Vec<UserId>,
}

//! Membership and visibility guards
//!
//! Pure predicates, invoked before any data-returning or state-mutating
//! operation that touches a group or bill. Authorization failure and
//! "not found" are distinct outcomes: callers resolve the entity first (404
//! path) and only then apply the guard (403 path), so the guard never leaks
//! partial data for entities the actor cannot see.

use core_kernel::UserId;

use crate::bill::Bill;
use crate::error::DomainError;
use crate::group::Group;

/// Fails unless the user is a member of the group
pub fn require_group_member(group: &Group, user_id: UserId) -> Result<(), DomainError> {
    if group.is_member(user_id) {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "user {user_id} is not a member of group {}",
            group.id
        )))
    }
}

/// Fails unless the user is the bill's payer or holds a share on it
pub fn require_bill_visible(bill: &Bill, user_id: UserId) -> Result<(), DomainError> {
    if bill.payer.id == user_id || bill.has_share(user_id) {
        Ok(())
    } else {
        Err(DomainError::forbidden(format!(
            "user {user_id} is not a participant of bill {}",
            bill.id
        )))
    }
}

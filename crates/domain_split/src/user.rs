//! User entity

use core_kernel::UserId;
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Users are created once via registration and are immutable afterwards.
/// The password is the stored credential as supplied at registration; it is
/// compared with a constant-time check and never serialized in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address, unique across the service
    pub email: String,
    /// Stored credential
    #[serde(skip_serializing)]
    pub password: String,
}

/// Data for registering a new user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

//! Domain error taxonomy

use core_kernel::{BillId, MoneyError, UserId};
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the domain layer
///
/// Every core operation returns one of these; none are swallowed. The
/// boundary layer owns the translation to transport status codes.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input (e.g. a non-positive total, an empty name)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The split arithmetic cannot produce a valid non-negative allocation
    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    /// The actor lacks permission for the operation
    #[error("Forbidden: {0}")]
    Authorization(String),

    /// A referenced entity is absent
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Uniqueness or business-rule collision
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The user holds no share on the referenced bill
    #[error("User {user_id} holds no share on bill {bill_id}")]
    NotParticipant { user_id: UserId, bill_id: BillId },

    /// Opaque failure from the persistence collaborator
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn invalid_split(message: impl Into<String>) -> Self {
        DomainError::InvalidSplit(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Authorization(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict(message.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, id } => DomainError::NotFound { entity, id },
            StoreError::Conflict(message) => DomainError::Conflict(message),
            StoreError::Connection(message) | StoreError::Internal(message) => {
                DomainError::Storage(message)
            }
        }
    }
}

impl From<MoneyError> for DomainError {
    fn from(error: MoneyError) -> Self {
        DomainError::InvalidSplit(error.to_string())
    }
}

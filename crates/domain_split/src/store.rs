//! Storage ports
//!
//! The domain consumes storage through these traits and receives them by
//! constructor injection; there is no process-wide engine or session state.
//! Each contract states exactly what it eagerly resolves - the domain never
//! triggers implicit follow-up fetches.

use async_trait::async_trait;
use core_kernel::{Amount, BillId, GroupId, UserId};
use thiserror::Error;

use crate::bill::{Bill, BillShare, NewBill, NewShare};
use crate::group::{Group, NewGroup};
use crate::transaction::{NewTransaction, Transaction};
use crate::user::{NewUser, User};

/// Error type for store operations
///
/// A unified error all store implementations must use. Uniqueness violations
/// surface as `Conflict`; everything the domain cannot interpret stays
/// opaque in `Connection`/`Internal` and is safe to retry only for reads.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested entity was not found
    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The operation collided with existing data (unique constraint)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Connection to the underlying store failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// An internal store error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

/// User persistence port
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a user; fails with `Conflict` when the email is taken
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Bulk lookup; unknown ids are silently absent from the result
    async fn get_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, StoreError>;
}

/// Group persistence port
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Creates the group and its memberships in one transaction
    async fn create(&self, group: NewGroup) -> Result<Group, StoreError>;

    /// Fetches a group with its members eagerly resolved
    async fn get_by_id(&self, id: GroupId) -> Result<Option<Group>, StoreError>;

    /// Adds a membership; fails with `Conflict` when it already exists
    async fn add_member(&self, group_id: GroupId, user_id: UserId) -> Result<(), StoreError>;
}

/// Bill persistence port
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Persists the bill row and all share rows atomically: either the whole
    /// bill commits or nothing does.
    async fn create_with_shares(
        &self,
        bill: NewBill,
        shares: Vec<NewShare>,
    ) -> Result<Bill, StoreError>;

    /// Fetches a bill with its payer, shares, and share users eagerly resolved
    async fn get_by_id(&self, id: BillId) -> Result<Option<Bill>, StoreError>;

    async fn get_share(
        &self,
        bill_id: BillId,
        user_id: UserId,
    ) -> Result<Option<BillShare>, StoreError>;
}

/// Transaction persistence port
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Appends a payment record; payer and recipient arrive eagerly resolved
    /// in the result
    async fn append(&self, transaction: NewTransaction) -> Result<Transaction, StoreError>;

    /// Sum of all payments the user has recorded against the bill
    async fn sum_paid(&self, bill_id: BillId, user_id: UserId) -> Result<Amount, StoreError>;
}

/// Credential verification port
///
/// Implementations must compare in constant time.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

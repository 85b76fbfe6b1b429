//! Settlement transaction entity

use chrono::{DateTime, Utc};
use core_kernel::{Amount, BillId, TransactionId, UserId};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A payment made against a bill share
///
/// Transactions are append-only: they never mutate the share they pay down.
/// Outstanding balance is always derived from the share amount minus the sum
/// of recorded transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Optional free-form note
    pub description: Option<String>,
    /// Amount paid
    pub amount: Amount,
    /// The bill this payment settles against
    pub bill_id: BillId,
    /// The user paying down their share, eagerly resolved
    pub payer: User,
    /// The user receiving the payment (normally the bill's payer), eagerly resolved
    pub recipient: User,
    /// When the payment was recorded
    pub created_at: DateTime<Utc>,
}

/// Data for persisting a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: Option<String>,
    pub amount: Amount,
    pub bill_id: BillId,
    pub payer_id: UserId,
    pub recipient_id: UserId,
}

//! Bill and bill-share entities

use chrono::{DateTime, Utc};
use core_kernel::{Amount, BillId, GroupId, UserId};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A bill charged to a group
///
/// A bill and its shares are created atomically and are immutable afterwards.
/// The payer fronted the money and need not hold a share; when the split left
/// a remainder to divide evenly, one equal part of it is silently absorbed by
/// the payer and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,
    /// What the bill was for
    pub description: String,
    /// Total amount fronted by the payer
    pub total_amount: Amount,
    /// The user who paid, eagerly resolved
    pub payer: User,
    /// The group this bill belongs to
    pub group_id: GroupId,
    /// Per-participant obligations, eagerly resolved
    pub shares: Vec<BillShare>,
    /// When the bill was recorded
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// The participants of this bill, derived from its shares
    ///
    /// Always computed, never stored separately, so it cannot diverge from
    /// the share set.
    pub fn participants(&self) -> impl Iterator<Item = &User> {
        self.shares.iter().map(|share| &share.user)
    }

    /// Returns true if the user holds a share on this bill
    pub fn has_share(&self, user_id: UserId) -> bool {
        self.shares.iter().any(|share| share.user.id == user_id)
    }

    /// Returns the user's share, if any
    pub fn share_for(&self, user_id: UserId) -> Option<&BillShare> {
        self.shares.iter().find(|share| share.user.id == user_id)
    }
}

/// A participant's obligation on a bill
///
/// At most one share exists per (bill, user) pair; the store's unique
/// constraint enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillShare {
    /// The bill this share belongs to
    pub bill_id: BillId,
    /// The participant, eagerly resolved
    pub user: User,
    /// How much the participant owes the payer
    pub amount: Amount,
}

/// Data for persisting a new bill
#[derive(Debug, Clone)]
pub struct NewBill {
    pub description: String,
    pub total_amount: Amount,
    pub payer_id: UserId,
    pub group_id: GroupId,
}

/// Data for persisting a single share of a new bill
#[derive(Debug, Clone)]
pub struct NewShare {
    pub user_id: UserId,
    pub amount: Amount,
}

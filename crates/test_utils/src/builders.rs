//! Builder patterns for request construction
//!
//! These builders let tests specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{Amount, GroupId, UserId};
use domain_split::{CreateBill, CreateGroup, ShareSpec};
use rust_decimal_macros::dec;

/// Builder for [`CreateBill`] requests
pub struct BillRequestBuilder {
    description: String,
    total_amount: Amount,
    payer_id: Option<UserId>,
    group_id: GroupId,
    shares: Vec<ShareSpec>,
}

impl BillRequestBuilder {
    /// Creates a builder for a bill in the given group
    pub fn new(group_id: GroupId) -> Self {
        Self {
            description: "dinner".to_string(),
            total_amount: Amount::new(dec!(90)),
            payer_id: None,
            group_id,
            shares: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_total(mut self, total_amount: Amount) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn with_payer(mut self, payer_id: UserId) -> Self {
        self.payer_id = Some(payer_id);
        self
    }

    /// Adds a participant taking an even share of the remainder
    pub fn with_even_share(mut self, user_id: UserId) -> Self {
        self.shares.push(ShareSpec::even(user_id));
        self
    }

    /// Adds a participant with a fixed share
    pub fn with_fixed_share(mut self, user_id: UserId, amount: Amount) -> Self {
        self.shares.push(ShareSpec::fixed(user_id, amount));
        self
    }

    pub fn build(self) -> CreateBill {
        CreateBill {
            description: self.description,
            total_amount: self.total_amount,
            payer_id: self.payer_id,
            group_id: self.group_id,
            shares: self.shares,
        }
    }
}

/// Builder for [`CreateGroup`] requests
pub struct GroupRequestBuilder {
    name: String,
    member_ids: Vec<UserId>,
}

impl Default for GroupRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupRequestBuilder {
    pub fn new() -> Self {
        Self {
            name: "flatmates".to_string(),
            member_ids: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_member(mut self, user_id: UserId) -> Self {
        self.member_ids.push(user_id);
        self
    }

    pub fn build(self) -> CreateGroup {
        CreateGroup {
            name: self.name,
            member_ids: self.member_ids,
        }
    }
}

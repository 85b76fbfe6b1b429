//! Bill DTOs

use chrono::{DateTime, Utc};
use core_kernel::{Amount, BillId, GroupId, UserId};
use domain_split::{Bill, BillShare, CreateBill, ShareSpec};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::users::UserResponse;

/// One participant entry in a bill-creation request
#[derive(Debug, Deserialize)]
pub struct ShareSpecRequest {
    pub user_id: Uuid,
    /// Fixed amount for this participant; omit for an even share of the
    /// remainder
    pub amount: Option<Decimal>,
}

impl From<ShareSpecRequest> for ShareSpec {
    fn from(request: ShareSpecRequest) -> Self {
        ShareSpec {
            user_id: UserId::from(request.user_id),
            amount: request.amount.map(Amount::new),
        }
    }
}

/// Request body for `POST /bills`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBillRequest {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    pub total_amount: Decimal,
    /// Defaults to the authenticated user
    pub payer_id: Option<Uuid>,
    pub group_id: Uuid,
    /// Omitted or empty: all group members except the payer, split evenly
    #[serde(default)]
    pub shares: Vec<ShareSpecRequest>,
}

impl From<CreateBillRequest> for CreateBill {
    fn from(request: CreateBillRequest) -> Self {
        CreateBill {
            description: request.description,
            total_amount: Amount::new(request.total_amount),
            payer_id: request.payer_id.map(UserId::from),
            group_id: GroupId::from(request.group_id),
            shares: request.shares.into_iter().map(ShareSpec::from).collect(),
        }
    }
}

/// A share as returned by the API
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub user: UserResponse,
    pub amount: Amount,
}

impl From<BillShare> for ShareResponse {
    fn from(share: BillShare) -> Self {
        ShareResponse {
            user: UserResponse::from(share.user),
            amount: share.amount,
        }
    }
}

/// A bill as returned by the API
#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub id: BillId,
    pub description: String,
    pub total_amount: Amount,
    pub payer: UserResponse,
    pub group_id: GroupId,
    pub shares: Vec<ShareResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Bill> for BillResponse {
    fn from(bill: Bill) -> Self {
        BillResponse {
            id: bill.id,
            description: bill.description,
            total_amount: bill.total_amount,
            payer: UserResponse::from(bill.payer),
            group_id: bill.group_id,
            shares: bill.shares.into_iter().map(ShareResponse::from).collect(),
            created_at: bill.created_at,
        }
    }
}

/// Response body for `GET /bills/:id/owed`
#[derive(Debug, Serialize)]
pub struct AmountOwedResponse {
    pub bill_id: BillId,
    pub user_id: UserId,
    pub amount_owed: Amount,
}

//! Transaction DTOs

use chrono::{DateTime, Utc};
use core_kernel::{Amount, BillId, TransactionId, UserId};
use domain_split::{CreateTransaction, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::users::UserResponse;

/// Request body for `POST /transactions`
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    pub amount: Decimal,
    pub bill_id: Uuid,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    /// Who receives the payment; must be a participant of the bill
    pub recipient_id: Uuid,
}

impl From<CreateTransactionRequest> for CreateTransaction {
    fn from(request: CreateTransactionRequest) -> Self {
        CreateTransaction {
            description: request.description,
            amount: Amount::new(request.amount),
            bill_id: BillId::from(request.bill_id),
            recipient_id: UserId::from(request.recipient_id),
        }
    }
}

/// A settlement payment as returned by the API
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub description: Option<String>,
    pub amount: Amount,
    pub bill_id: BillId,
    pub payer: UserResponse,
    pub recipient: UserResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        TransactionResponse {
            id: transaction.id,
            description: transaction.description,
            amount: transaction.amount,
            bill_id: transaction.bill_id,
            payer: UserResponse::from(transaction.payer),
            recipient: UserResponse::from(transaction.recipient),
            created_at: transaction.created_at,
        }
    }
}

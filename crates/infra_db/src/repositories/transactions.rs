//! Transaction repository implementation

use async_trait::async_trait;
use chrono::Utc;
use core_kernel::{Amount, BillId, TransactionId, UserId};
use domain_split::{NewTransaction, StoreError, Transaction, TransactionStore};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::store_err;
use super::users::fetch_user;

/// PostgreSQL-backed transaction store
///
/// Transactions are append-only: there is no update or delete path.
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn append(&self, transaction: NewTransaction) -> Result<Transaction, StoreError> {
        let id = TransactionId::new_v7();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO transactions (id, description, amount, payer_id, bill_id, recipient_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&transaction.description)
        .bind(transaction.amount.as_decimal())
        .bind(transaction.payer_id.as_uuid())
        .bind(transaction.bill_id.as_uuid())
        .bind(transaction.recipient_id.as_uuid())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        let payer = fetch_user(&self.pool, *transaction.payer_id.as_uuid())
            .await?
            .ok_or_else(|| {
                StoreError::Internal(format!("payer {} missing", transaction.payer_id))
            })?;
        let recipient = fetch_user(&self.pool, *transaction.recipient_id.as_uuid())
            .await?
            .ok_or_else(|| {
                StoreError::Internal(format!("recipient {} missing", transaction.recipient_id))
            })?;

        Ok(Transaction {
            id,
            description: transaction.description,
            amount: transaction.amount,
            bill_id: transaction.bill_id,
            payer,
            recipient,
            created_at: now,
        })
    }

    async fn sum_paid(&self, bill_id: BillId, user_id: UserId) -> Result<Amount, StoreError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM transactions
            WHERE bill_id = $1 AND payer_id = $2
            "#,
        )
        .bind(bill_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(Amount::new(total))
    }
}

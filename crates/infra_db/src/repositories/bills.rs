//! Bill repository implementation
//!
//! Bill creation is the one multi-row write in the system: the bill row and
//! all of its share rows are staged on a single transaction so that either
//! the whole bill commits or nothing does.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::{Amount, BillId, GroupId, UserId};
use domain_split::{Bill, BillShare, BillStore, NewBill, NewShare, StoreError, User};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use super::store_err;

/// Database row for a bill with its payer flattened in
#[derive(Debug, sqlx::FromRow)]
struct BillRow {
    id: Uuid,
    description: String,
    total_amount: Decimal,
    group_id: Uuid,
    created_at: DateTime<Utc>,
    payer_id: Uuid,
    payer_name: String,
    payer_email: String,
    payer_password: String,
}

/// Database row for a share with its user flattened in
#[derive(Debug, sqlx::FromRow)]
struct ShareRow {
    bill_id: Uuid,
    amount: Decimal,
    user_id: Uuid,
    user_name: String,
    user_email: String,
    user_password: String,
}

impl From<ShareRow> for BillShare {
    fn from(row: ShareRow) -> Self {
        BillShare {
            bill_id: BillId::from(row.bill_id),
            user: User {
                id: UserId::from(row.user_id),
                name: row.user_name,
                email: row.user_email,
                password: row.user_password,
            },
            amount: Amount::new(row.amount),
        }
    }
}

/// PostgreSQL-backed bill store
#[derive(Debug, Clone)]
pub struct PgBillStore {
    pool: PgPool,
}

impl PgBillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_shares(&self, bill_id: Uuid) -> Result<Vec<BillShare>, StoreError> {
        let rows = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT
                s.bill_id,
                s.amount,
                u.id AS user_id,
                u.name AS user_name,
                u.email AS user_email,
                u.password AS user_password
            FROM bill_shares s
            JOIN users u ON u.id = s.user_id
            WHERE s.bill_id = $1
            ORDER BY u.name
            "#,
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(BillShare::from).collect())
    }
}

#[async_trait]
impl BillStore for PgBillStore {
    async fn create_with_shares(
        &self,
        bill: NewBill,
        shares: Vec<NewShare>,
    ) -> Result<Bill, StoreError> {
        let id = BillId::new_v7();
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(store_err)?;

        sqlx::query(
            r#"
            INSERT INTO bills (id, description, total_amount, payer_id, group_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&bill.description)
        .bind(bill.total_amount.as_decimal())
        .bind(bill.payer_id.as_uuid())
        .bind(bill.group_id.as_uuid())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;

        for share in &shares {
            sqlx::query("INSERT INTO bill_shares (bill_id, user_id, amount) VALUES ($1, $2, $3)")
                .bind(id.as_uuid())
                .bind(share.user_id.as_uuid())
                .bind(share.amount.as_decimal())
                .execute(&mut *tx)
                .await
                .map_err(store_err)?;
        }

        tx.commit().await.map_err(store_err)?;

        self.get_by_id(id).await?.ok_or_else(|| {
            StoreError::Internal(format!("bill {id} vanished after commit"))
        })
    }

    async fn get_by_id(&self, id: BillId) -> Result<Option<Bill>, StoreError> {
        let row = sqlx::query_as::<_, BillRow>(
            r#"
            SELECT
                b.id,
                b.description,
                b.total_amount,
                b.group_id,
                b.created_at,
                u.id AS payer_id,
                u.name AS payer_name,
                u.email AS payer_email,
                u.password AS payer_password
            FROM bills b
            JOIN users u ON u.id = b.payer_id
            WHERE b.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let shares = self.fetch_shares(row.id).await?;
        Ok(Some(Bill {
            id: BillId::from(row.id),
            description: row.description,
            total_amount: Amount::new(row.total_amount),
            payer: User {
                id: UserId::from(row.payer_id),
                name: row.payer_name,
                email: row.payer_email,
                password: row.payer_password,
            },
            group_id: GroupId::from(row.group_id),
            shares,
            created_at: row.created_at,
        }))
    }

    async fn get_share(
        &self,
        bill_id: BillId,
        user_id: UserId,
    ) -> Result<Option<BillShare>, StoreError> {
        let row = sqlx::query_as::<_, ShareRow>(
            r#"
            SELECT
                s.bill_id,
                s.amount,
                u.id AS user_id,
                u.name AS user_name,
                u.email AS user_email,
                u.password AS user_password
            FROM bill_shares s
            JOIN users u ON u.id = s.user_id
            WHERE s.bill_id = $1 AND s.user_id = $2
            "#,
        )
        .bind(bill_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(BillShare::from))
    }
}

//! In-memory implementations of the domain store ports
//!
//! One `MemoryStore` implements every port against a single mutex-guarded
//! state, mirroring the behavior the PostgreSQL repositories get from their
//! constraints: unique emails, at most one membership per (user, group), at
//! most one share per (bill, user), and atomic bill-plus-shares creation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use core_kernel::{Amount, BillId, GroupId, TransactionId, UserId};
use domain_split::{
    Bill, BillShare, BillStore, CredentialVerifier, Group, GroupStore, NewBill, NewGroup,
    NewShare, NewTransaction, NewUser, SplitService, StoreError, Transaction, TransactionStore,
    User, UserStore,
};

#[derive(Debug, Clone)]
struct StoredGroup {
    id: GroupId,
    name: String,
    member_ids: Vec<UserId>,
}

#[derive(Debug, Clone)]
struct StoredBill {
    id: BillId,
    description: String,
    total_amount: Amount,
    payer_id: UserId,
    group_id: GroupId,
    shares: Vec<(UserId, Amount)>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoredTransaction {
    id: TransactionId,
    description: Option<String>,
    amount: Amount,
    bill_id: BillId,
    payer_id: UserId,
    recipient_id: UserId,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    groups: Vec<StoredGroup>,
    bills: Vec<StoredBill>,
    transactions: Vec<StoredTransaction>,
}

impl Inner {
    fn user(&self, id: UserId) -> Result<User, StoreError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| StoreError::Internal(format!("user {id} missing")))
    }

    fn resolve_sorted(&self, ids: &[UserId]) -> Result<Vec<User>, StoreError> {
        let mut users = ids
            .iter()
            .map(|&id| self.user(id))
            .collect::<Result<Vec<_>, _>>()?;
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    fn materialize_group(&self, stored: &StoredGroup) -> Result<Group, StoreError> {
        Ok(Group {
            id: stored.id,
            name: stored.name.clone(),
            members: self.resolve_sorted(&stored.member_ids)?,
        })
    }

    fn materialize_bill(&self, stored: &StoredBill) -> Result<Bill, StoreError> {
        let mut shares = stored
            .shares
            .iter()
            .map(|&(user_id, amount)| {
                Ok(BillShare {
                    bill_id: stored.id,
                    user: self.user(user_id)?,
                    amount,
                })
            })
            .collect::<Result<Vec<_>, StoreError>>()?;
        shares.sort_by(|a, b| a.user.name.cmp(&b.user.name));

        Ok(Bill {
            id: stored.id,
            description: stored.description.clone(),
            total_amount: stored.total_amount,
            payer: self.user(stored.payer_id)?,
            group_id: stored.group_id,
            shares,
            created_at: stored.created_at,
        })
    }
}

/// In-memory store backing every port
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::Conflict(format!(
                "user with email '{}' already exists",
                user.email
            )));
        }

        let user = User {
            id: UserId::new_v7(),
            name: user.name,
            email: user.email,
            password: user.password,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|user| user.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|user| user.email == email).cloned())
    }

    async fn get_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut users: Vec<User> = inner
            .users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn create(&self, group: NewGroup) -> Result<Group, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let stored = StoredGroup {
            id: GroupId::new_v7(),
            name: group.name,
            member_ids: group.member_ids,
        };
        let materialized = inner.materialize_group(&stored)?;
        inner.groups.push(stored);
        Ok(materialized)
    }

    async fn get_by_id(&self, id: GroupId) -> Result<Option<Group>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .groups
            .iter()
            .find(|group| group.id == id)
            .map(|stored| inner.materialize_group(stored))
            .transpose()
    }

    async fn add_member(&self, group_id: GroupId, user_id: UserId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let group = inner
            .groups
            .iter_mut()
            .find(|group| group.id == group_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "group",
                id: group_id.to_string(),
            })?;

        if group.member_ids.contains(&user_id) {
            return Err(StoreError::Conflict(format!(
                "user {user_id} is already a member of group {group_id}"
            )));
        }
        group.member_ids.push(user_id);
        Ok(())
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn create_with_shares(
        &self,
        bill: NewBill,
        shares: Vec<NewShare>,
    ) -> Result<Bill, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        let mut stored_shares = Vec::with_capacity(shares.len());
        for share in &shares {
            if stored_shares
                .iter()
                .any(|&(user_id, _)| user_id == share.user_id)
            {
                return Err(StoreError::Conflict(format!(
                    "duplicate share for user {}",
                    share.user_id
                )));
            }
            stored_shares.push((share.user_id, share.amount));
        }

        let stored = StoredBill {
            id: BillId::new_v7(),
            description: bill.description,
            total_amount: bill.total_amount,
            payer_id: bill.payer_id,
            group_id: bill.group_id,
            shares: stored_shares,
            created_at: Utc::now(),
        };
        let materialized = inner.materialize_bill(&stored)?;
        inner.bills.push(stored);
        Ok(materialized)
    }

    async fn get_by_id(&self, id: BillId) -> Result<Option<Bill>, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .bills
            .iter()
            .find(|bill| bill.id == id)
            .map(|stored| inner.materialize_bill(stored))
            .transpose()
    }

    async fn get_share(
        &self,
        bill_id: BillId,
        user_id: UserId,
    ) -> Result<Option<BillShare>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let Some(bill) = inner.bills.iter().find(|bill| bill.id == bill_id) else {
            return Ok(None);
        };

        bill.shares
            .iter()
            .find(|&&(share_user, _)| share_user == user_id)
            .map(|&(share_user, amount)| {
                Ok(BillShare {
                    bill_id,
                    user: inner.user(share_user)?,
                    amount,
                })
            })
            .transpose()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn append(&self, transaction: NewTransaction) -> Result<Transaction, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let stored = StoredTransaction {
            id: TransactionId::new_v7(),
            description: transaction.description,
            amount: transaction.amount,
            bill_id: transaction.bill_id,
            payer_id: transaction.payer_id,
            recipient_id: transaction.recipient_id,
            created_at: Utc::now(),
        };

        let materialized = Transaction {
            id: stored.id,
            description: stored.description.clone(),
            amount: stored.amount,
            bill_id: stored.bill_id,
            payer: inner.user(stored.payer_id)?,
            recipient: inner.user(stored.recipient_id)?,
            created_at: stored.created_at,
        };
        inner.transactions.push(stored);
        Ok(materialized)
    }

    async fn sum_paid(&self, bill_id: BillId, user_id: UserId) -> Result<Amount, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .transactions
            .iter()
            .filter(|tx| tx.bill_id == bill_id && tx.payer_id == user_id)
            .map(|tx| tx.amount)
            .sum())
    }
}

/// Plain-equality credential verifier for tests
#[derive(Debug, Default)]
pub struct PlainVerifier;

impl CredentialVerifier for PlainVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}

/// A service wired entirely to one shared in-memory store
pub fn memory_service() -> (SplitService, Arc<MemoryStore>) {
    let store = MemoryStore::shared();
    let service = SplitService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(PlainVerifier),
    );
    (service, store)
}

//! Application service
//!
//! Orchestrates guard checks, the split calculator, and the storage ports for
//! each inbound operation. All collaborators are injected at construction;
//! the service itself holds no mutable state and is cheap to clone.

use std::sync::Arc;

use core_kernel::{Amount, BillId, GroupId, UserId};
use tracing::info;

use crate::bill::{Bill, NewBill, NewShare};
use crate::error::DomainError;
use crate::group::{Group, NewGroup};
use crate::guard;
use crate::ledger;
use crate::split::{self, ShareSpec};
use crate::store::{BillStore, CredentialVerifier, GroupStore, TransactionStore, UserStore};
use crate::transaction::{NewTransaction, Transaction};
use crate::user::{NewUser, User};

/// Request to create a group
#[derive(Debug, Clone)]
pub struct CreateGroup {
    pub name: String,
    pub member_ids: Vec<UserId>,
}

/// Request to create a bill
///
/// `payer_id` defaults to the acting user. An empty share list means "all
/// group members except the payer, split evenly".
#[derive(Debug, Clone)]
pub struct CreateBill {
    pub description: String,
    pub total_amount: Amount,
    pub payer_id: Option<UserId>,
    pub group_id: GroupId,
    pub shares: Vec<ShareSpec>,
}

/// Request to record a settlement payment
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    pub description: Option<String>,
    pub amount: Amount,
    pub bill_id: BillId,
    pub recipient_id: UserId,
}

/// The expense-splitting application service
#[derive(Clone)]
pub struct SplitService {
    users: Arc<dyn UserStore>,
    groups: Arc<dyn GroupStore>,
    bills: Arc<dyn BillStore>,
    transactions: Arc<dyn TransactionStore>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SplitService {
    pub fn new(
        users: Arc<dyn UserStore>,
        groups: Arc<dyn GroupStore>,
        bills: Arc<dyn BillStore>,
        transactions: Arc<dyn TransactionStore>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            users,
            groups,
            bills,
            transactions,
            verifier,
        }
    }

    /// Registers a new user.
    ///
    /// Duplicate emails surface as `Conflict` from the store's unique
    /// constraint; the check is translated here, not re-implemented. Retrying
    /// a create is therefore safe: the second attempt conflicts instead of
    /// duplicating.
    pub async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        if user.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if user.email.trim().is_empty() {
            return Err(DomainError::validation("email must not be empty"));
        }

        let user = self.users.create(user).await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    pub async fn get_user(&self, id: UserId) -> Result<User, DomainError> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", id))
    }

    /// Bulk user lookup; unknown ids are silently dropped
    pub async fn get_users(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        Ok(self.users.get_by_ids(ids).await?)
    }

    /// Verifies credentials against the stored user record.
    ///
    /// Returns `Ok(None)` for an unknown email or a failed verification; the
    /// boundary maps that to an unauthorized response. The comparison itself
    /// is constant-time via the injected verifier.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let Some(user) = self.users.get_by_email(email).await? else {
            return Ok(None);
        };

        if self.verifier.verify(password, &user.password) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Creates a group. The creator is always included as a member.
    pub async fn create_group(
        &self,
        request: CreateGroup,
        creator: &User,
    ) -> Result<Group, DomainError> {
        if request.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }

        let mut member_ids: Vec<UserId> = Vec::with_capacity(request.member_ids.len() + 1);
        for id in request.member_ids {
            if !member_ids.contains(&id) {
                member_ids.push(id);
            }
        }
        if !member_ids.contains(&creator.id) {
            member_ids.push(creator.id);
        }
        self.require_users_exist(&member_ids).await?;

        let group = self
            .groups
            .create(NewGroup {
                name: request.name,
                member_ids,
            })
            .await?;
        info!(group_id = %group.id, members = group.members.len(), "group created");
        Ok(group)
    }

    /// Fetches a group. Absence is a not-found outcome; a non-member actor is
    /// a distinct forbidden outcome, checked before anything is returned.
    pub async fn get_group(&self, id: GroupId, actor: &User) -> Result<Group, DomainError> {
        let group = self
            .groups
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("group", id))?;
        guard::require_group_member(&group, actor.id)?;
        Ok(group)
    }

    /// Adds a user to a group and returns the updated group.
    pub async fn add_member(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<Group, DomainError> {
        let group = self
            .groups
            .get_by_id(group_id)
            .await?
            .ok_or_else(|| DomainError::not_found("group", group_id))?;
        let user = self.get_user(user_id).await?;

        self.groups.add_member(group.id, user.id).await?;
        info!(group_id = %group.id, user_id = %user.id, "member added");

        self.groups
            .get_by_id(group_id)
            .await?
            .ok_or_else(|| DomainError::not_found("group", group_id))
    }

    /// Creates a bill and its shares atomically.
    ///
    /// The actor must be a member of the group. The payer defaults to the
    /// actor; a supplied `payer_id` is resolved and must exist. An empty
    /// share list defaults to all group members except the payer, each taking
    /// an even share of the total.
    pub async fn create_bill(
        &self,
        request: CreateBill,
        actor: &User,
    ) -> Result<Bill, DomainError> {
        if !request.total_amount.is_positive() {
            return Err(DomainError::validation(format!(
                "total_amount must be positive, got {}",
                request.total_amount
            )));
        }

        let group = self
            .groups
            .get_by_id(request.group_id)
            .await?
            .ok_or_else(|| DomainError::not_found("group", request.group_id))?;
        guard::require_group_member(&group, actor.id)?;

        let payer = match request.payer_id {
            Some(id) if id != actor.id => self.get_user(id).await?,
            _ => actor.clone(),
        };

        let explicit_shares = !request.shares.is_empty();
        let specs: Vec<ShareSpec> = if explicit_shares {
            request.shares
        } else {
            group
                .member_ids()
                .filter(|&id| id != payer.id)
                .map(ShareSpec::even)
                .collect()
        };

        // compute_shares also rejects duplicated participants, so the
        // existence check below sees unique ids.
        let amounts = split::compute_shares(request.total_amount, &specs)?;
        if explicit_shares {
            let ids: Vec<UserId> = specs.iter().map(|spec| spec.user_id).collect();
            self.require_users_exist(&ids).await?;
        }
        let shares = specs
            .iter()
            .map(|spec| NewShare {
                user_id: spec.user_id,
                amount: amounts[&spec.user_id],
            })
            .collect();

        let bill = self
            .bills
            .create_with_shares(
                NewBill {
                    description: request.description,
                    total_amount: request.total_amount,
                    payer_id: payer.id,
                    group_id: group.id,
                },
                shares,
            )
            .await?;
        info!(
            bill_id = %bill.id,
            total = %bill.total_amount,
            shares = bill.shares.len(),
            "bill created"
        );
        Ok(bill)
    }

    /// Fetches a bill. Absence is a not-found outcome; an actor who is
    /// neither payer nor share-holder is a distinct forbidden outcome,
    /// checked before anything is returned.
    pub async fn get_bill(&self, id: BillId, actor: &User) -> Result<Bill, DomainError> {
        let bill = self
            .bills
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("bill", id))?;
        guard::require_bill_visible(&bill, actor.id)?;
        Ok(bill)
    }

    /// The actor's outstanding balance on a bill: their share amount minus
    /// everything they have paid so far. Negative on overpayment.
    pub async fn amount_owed(&self, bill_id: BillId, actor: &User) -> Result<Amount, DomainError> {
        let bill = self
            .bills
            .get_by_id(bill_id)
            .await?
            .ok_or_else(|| DomainError::not_found("bill", bill_id))?;

        let share = self
            .bills
            .get_share(bill.id, actor.id)
            .await?
            .ok_or(DomainError::NotParticipant {
                user_id: actor.id,
                bill_id: bill.id,
            })?;

        let paid = self.transactions.sum_paid(bill.id, actor.id).await?;
        Ok(ledger::outstanding_balance(&share, paid))
    }

    /// Records a settlement payment made by the actor against a bill.
    pub async fn create_transaction(
        &self,
        request: CreateTransaction,
        actor: &User,
    ) -> Result<Transaction, DomainError> {
        if !request.amount.is_positive() {
            return Err(DomainError::validation(format!(
                "amount must be positive, got {}",
                request.amount
            )));
        }

        let bill = self
            .bills
            .get_by_id(request.bill_id)
            .await?
            .ok_or_else(|| DomainError::not_found("bill", request.bill_id))?;
        guard::require_bill_visible(&bill, actor.id)?;
        ledger::require_recipient_is_participant(&bill, request.recipient_id)?;

        let transaction = self
            .transactions
            .append(NewTransaction {
                description: request.description,
                amount: request.amount,
                bill_id: bill.id,
                payer_id: actor.id,
                recipient_id: request.recipient_id,
            })
            .await?;
        info!(
            transaction_id = %transaction.id,
            bill_id = %bill.id,
            amount = %transaction.amount,
            "transaction recorded"
        );
        Ok(transaction)
    }

    /// Resolves the given ids and fails with `NotFound` naming the first
    /// missing one.
    async fn require_users_exist(&self, ids: &[UserId]) -> Result<Vec<User>, DomainError> {
        let users = self.users.get_by_ids(ids).await?;
        for id in ids {
            if !users.iter().any(|user| user.id == *id) {
                return Err(DomainError::not_found("user", *id));
            }
        }
        Ok(users)
    }
}

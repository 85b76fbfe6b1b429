//! Expense-Splitting Domain
//!
//! This crate implements the core of the expense-splitting service: given a
//! bill's total amount, a payer, and a set of participants (some with fixed
//! shares, some without), it computes who owes what, gates every operation
//! behind membership checks, and derives outstanding balances from recorded
//! settlement transactions.
//!
//! # Components
//!
//! - **Split calculator** ([`split`]): pure share arithmetic. Fixed shares are
//!   honored; the remainder is divided evenly among the participants without
//!   a fixed share *plus the payer*, whose share is an accounting convention
//!   and is never persisted.
//! - **Authorization guard** ([`guard`]): membership and visibility
//!   predicates, invoked before any data is fetched or returned.
//! - **Settlement ledger** ([`ledger`]): outstanding balance derived from a
//!   bill share minus the sum of recorded payments; payments are append-only.
//! - **Application service** ([`service`]): orchestrates guard checks, the
//!   calculator, and the storage ports for each inbound operation.
//!
//! Storage is abstracted behind the port traits in [`store`]; implementations
//! live in the infrastructure crate, with in-memory doubles for tests.

pub mod bill;
pub mod error;
pub mod group;
pub mod guard;
pub mod ledger;
pub mod service;
pub mod split;
pub mod store;
pub mod transaction;
pub mod user;

pub use bill::{Bill, BillShare, NewBill, NewShare};
pub use error::DomainError;
pub use group::{Group, NewGroup};
pub use service::{CreateBill, CreateGroup, CreateTransaction, SplitService};
pub use split::{compute_shares, ShareSpec};
pub use store::{
    BillStore, CredentialVerifier, GroupStore, StoreError, TransactionStore, UserStore,
};
pub use transaction::{NewTransaction, Transaction};
pub use user::{NewUser, User};

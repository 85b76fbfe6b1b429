//! Core Kernel - Foundational types for the expense-splitting service
//!
//! This crate provides the building blocks used across all other crates:
//! - Monetary amounts with precise decimal arithmetic
//! - Strongly-typed identifiers for domain entities

pub mod identifiers;
pub mod money;

pub use identifiers::{BillId, GroupId, TransactionId, UserId};
pub use money::{Amount, MoneyError};

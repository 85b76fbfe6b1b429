//! Request handlers

pub mod bills;
pub mod groups;
pub mod health;
pub mod transactions;
pub mod users;

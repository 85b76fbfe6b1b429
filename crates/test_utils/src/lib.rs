//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the expense-splitting test suite.
//!
//! # Modules
//!
//! - `memory`: in-memory implementations of the domain store ports
//! - `fixtures`: pre-built test data for common entities
//! - `builders`: builder patterns for request construction
//! - `assertions`: custom assertion helpers for domain types

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod memory;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use memory::*;

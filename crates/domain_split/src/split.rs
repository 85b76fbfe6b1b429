//! Split calculator
//!
//! Pure share arithmetic: no I/O, no side effects, deterministic.

use std::collections::{HashMap, HashSet};

use core_kernel::{Amount, UserId};
use rust_decimal::Decimal;

use crate::error::DomainError;

/// A participant in a bill split, with an optional fixed share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareSpec {
    pub user_id: UserId,
    /// A fixed amount this participant owes; `None` means an even share of
    /// the remainder.
    pub amount: Option<Amount>,
}

impl ShareSpec {
    /// A participant taking an even share of the remainder
    pub fn even(user_id: UserId) -> Self {
        Self {
            user_id,
            amount: None,
        }
    }

    /// A participant with a fixed share
    pub fn fixed(user_id: UserId, amount: Amount) -> Self {
        Self {
            user_id,
            amount: Some(amount),
        }
    }
}

/// Computes how much each participant owes the payer.
///
/// Fixed shares are honored as given. The remainder (total minus the sum of
/// fixed shares) is divided evenly among the participants without a fixed
/// share *plus one extra part for the payer*: the payer fronted the money and
/// is owed nothing, but the division counts them as one of the equal sharers,
/// so their part of the remainder is absorbed rather than assigned. The sum
/// of the returned shares therefore equals the total minus one equal part,
/// not the total itself.
///
/// An empty participant set is accepted and yields an empty mapping; the
/// payer then absorbs the entire remainder. Callers that want "everyone in
/// the group except the payer" resolve that set before calling.
///
/// # Errors
///
/// - `Validation` for a non-positive total, a duplicated participant, or a
///   negative fixed share
/// - `InvalidSplit` when the fixed shares exceed the total (the remainder
///   would be negative)
pub fn compute_shares(
    total_amount: Amount,
    participants: &[ShareSpec],
) -> Result<HashMap<UserId, Amount>, DomainError> {
    if !total_amount.is_positive() {
        return Err(DomainError::validation(format!(
            "total_amount must be positive, got {total_amount}"
        )));
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for spec in participants {
        if !seen.insert(spec.user_id) {
            return Err(DomainError::validation(format!(
                "duplicate participant {}",
                spec.user_id
            )));
        }
        if let Some(amount) = spec.amount {
            if amount.is_negative() {
                return Err(DomainError::validation(format!(
                    "fixed share for {} must be non-negative, got {amount}",
                    spec.user_id
                )));
            }
        }
    }

    let defined_sum: Amount = participants.iter().filter_map(|spec| spec.amount).sum();
    let undefined_count = participants
        .iter()
        .filter(|spec| spec.amount.is_none())
        .count();

    let remainder = total_amount - defined_sum;
    if remainder.is_negative() {
        return Err(DomainError::invalid_split(format!(
            "fixed shares sum to {defined_sum}, exceeding the total {total_amount}"
        )));
    }

    // One extra part for the payer, who is not in the participant set.
    let equal_share_count = undefined_count + 1;
    let equal_share = remainder.divide(Decimal::from(equal_share_count as u64))?;

    let shares = participants
        .iter()
        .map(|spec| (spec.user_id, spec.amount.unwrap_or(equal_share)))
        .collect();

    Ok(shares)
}

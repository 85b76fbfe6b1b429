//! Settlement ledger
//!
//! Outstanding balances are derived, never stored: a share's amount minus the
//! sum of the payments recorded against it. Payments are append-only.

use core_kernel::{Amount, UserId};

use crate::bill::{Bill, BillShare};
use crate::error::DomainError;

/// The balance a participant still owes on their share.
///
/// Overpayment is a valid state, not an error: the result goes negative when
/// the recorded payments exceed the share.
pub fn outstanding_balance(share: &BillShare, paid: Amount) -> Amount {
    share.amount - paid
}

/// Fails unless the recipient is a participant of the bill.
///
/// A transaction may only be recorded when its declared recipient holds a
/// share on the bill or is the bill's payer. This is a business-rule
/// collision rather than a permission failure, so it surfaces as a conflict.
pub fn require_recipient_is_participant(
    bill: &Bill,
    recipient_id: UserId,
) -> Result<(), DomainError> {
    if bill.payer.id == recipient_id || bill.has_share(recipient_id) {
        Ok(())
    } else {
        Err(DomainError::conflict(
            "recipient is not a participant of this bill",
        ))
    }
}

//! Custom assertion helpers for domain types

use core_kernel::Amount;

/// Asserts two amounts are equal within the service-wide tolerance.
///
/// Split arithmetic keeps full decimal precision, so recombined shares can
/// differ from the original total by division residue; comparisons must use
/// the tolerance rather than exact equality.
pub fn assert_amount_approx(actual: Amount, expected: Amount) {
    assert!(
        actual.approx_eq(expected),
        "amounts differ beyond tolerance: actual={actual}, expected={expected}"
    );
}

//! Tests for the split calculator

use core_kernel::{Amount, UserId};
use domain_split::error::DomainError;
use domain_split::split::{compute_shares, ShareSpec};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn amount(value: Decimal) -> Amount {
    Amount::new(value)
}

#[test]
fn test_three_undefined_participants_split_four_ways() {
    // 90 split between A, B, C and the payer: 4 equal parts of 22.50.
    let (a, b, c) = (UserId::new(), UserId::new(), UserId::new());
    let specs = [ShareSpec::even(a), ShareSpec::even(b), ShareSpec::even(c)];

    let shares = compute_shares(amount(dec!(90)), &specs).unwrap();

    assert_eq!(shares.len(), 3);
    for user in [a, b, c] {
        assert_eq!(shares[&user], amount(dec!(22.5)));
    }
}

#[test]
fn test_mixed_shares_payer_absorbs_one_equal_part() {
    // A has a fixed 30; the remaining 70 is divided between B and the payer.
    // B owes 35, and the assigned shares sum to 65, not 100: the payer's
    // equal part of the remainder is absorbed silently and never recorded.
    let (a, b) = (UserId::new(), UserId::new());
    let specs = [ShareSpec::fixed(a, amount(dec!(30))), ShareSpec::even(b)];

    let shares = compute_shares(amount(dec!(100)), &specs).unwrap();

    assert_eq!(shares[&a], amount(dec!(30)));
    assert_eq!(shares[&b], amount(dec!(35)));

    let assigned: Amount = shares.values().copied().sum();
    assert_eq!(assigned, amount(dec!(65)));
}

#[test]
fn test_fixed_shares_exceeding_total_fail() {
    let (a, b) = (UserId::new(), UserId::new());
    let specs = [
        ShareSpec::fixed(a, amount(dec!(80))),
        ShareSpec::fixed(b, amount(dec!(30))),
    ];

    let err = compute_shares(amount(dec!(100)), &specs).unwrap_err();
    assert!(matches!(err, DomainError::InvalidSplit(_)));
}

#[test]
fn test_fixed_shares_equal_to_total_are_valid() {
    // Zero remainder: the single equal sharer (the payer) absorbs nothing.
    let a = UserId::new();
    let specs = [ShareSpec::fixed(a, amount(dec!(100)))];

    let shares = compute_shares(amount(dec!(100)), &specs).unwrap();
    assert_eq!(shares[&a], amount(dec!(100)));
}

#[test]
fn test_single_undefined_participant_pays_half() {
    let a = UserId::new();
    let specs = [ShareSpec::even(a)];

    let shares = compute_shares(amount(dec!(50)), &specs).unwrap();
    assert_eq!(shares[&a], amount(dec!(25)));
}

#[test]
fn test_negative_total_rejected() {
    let err = compute_shares(amount(dec!(-10)), &[]).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[test]
fn test_compute_shares_is_deterministic() {
    let (a, b) = (UserId::new(), UserId::new());
    let specs = [ShareSpec::fixed(a, amount(dec!(12.34))), ShareSpec::even(b)];

    let first = compute_shares(amount(dec!(99.99)), &specs).unwrap();
    let second = compute_shares(amount(dec!(99.99)), &specs).unwrap();

    assert_eq!(first, second);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn spec_strategy() -> impl Strategy<Value = ShareSpec> {
        // Fixed shares up to 100.00, or an even share.
        prop_oneof![
            Just(None::<i64>),
            (0i64..10_000i64).prop_map(Some),
        ]
        .prop_map(|fixed| match fixed {
            Some(minor) => ShareSpec::fixed(UserId::new(), Amount::from_minor(minor)),
            None => ShareSpec::even(UserId::new()),
        })
    }

    proptest! {
        #[test]
        fn assigned_plus_payer_share_equals_total(
            specs in proptest::collection::vec(spec_strategy(), 0..20),
            extra_minor in 1i64..1_000_000i64
        ) {
            // Make the total always exceed the fixed shares so the split is valid.
            let defined: Amount = specs.iter().filter_map(|s| s.amount).sum();
            let total = defined + Amount::from_minor(extra_minor);

            let shares = compute_shares(total, &specs).unwrap();

            let undefined_count = specs.iter().filter(|s| s.amount.is_none()).count();
            let equal_share = (total - defined)
                .divide(Decimal::from(undefined_count as u64 + 1))
                .unwrap();

            let assigned: Amount = shares.values().copied().sum();
            prop_assert!((assigned + equal_share).approx_eq(total));
        }

        #[test]
        fn all_even_shares_equal_total_over_n_plus_one(
            count in 1usize..20,
            total_minor in 1i64..1_000_000i64
        ) {
            let specs: Vec<ShareSpec> =
                (0..count).map(|_| ShareSpec::even(UserId::new())).collect();
            let total = Amount::from_minor(total_minor);

            let shares = compute_shares(total, &specs).unwrap();
            let expected = total.divide(Decimal::from(count as u64 + 1)).unwrap();

            for spec in &specs {
                prop_assert_eq!(shares[&spec.user_id], expected);
            }
        }

        #[test]
        fn overcommitted_fixed_shares_always_fail(
            total_minor in 1i64..1_000_000i64,
            excess_minor in 1i64..1_000_000i64
        ) {
            let total = Amount::from_minor(total_minor);
            let fixed = total + Amount::from_minor(excess_minor);
            let specs = [ShareSpec::fixed(UserId::new(), fixed)];

            let result = compute_shares(total, &specs);
            prop_assert!(matches!(result, Err(DomainError::InvalidSplit(_))));
        }
    }
}

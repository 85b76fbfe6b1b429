//! Tests for monetary amount arithmetic

use core_kernel::{Amount, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_sum_of_amounts() {
    let amounts = vec![
        Amount::new(dec!(10.25)),
        Amount::new(dec!(5.75)),
        Amount::new(dec!(4.00)),
    ];

    let total: Amount = amounts.into_iter().sum();
    assert_eq!(total.as_decimal(), dec!(20.00));
}

#[test]
fn test_sum_of_empty_iterator_is_zero() {
    let total: Amount = std::iter::empty::<Amount>().sum();
    assert!(total.is_zero());
}

#[test]
fn test_negation() {
    let a = Amount::new(dec!(12.50));
    assert_eq!((-a).as_decimal(), dec!(-12.50));
    assert!((-a).is_negative());
}

#[test]
fn test_subtraction_can_go_negative() {
    let share = Amount::new(dec!(20));
    let paid = Amount::new(dec!(30));

    let balance = share - paid;
    assert!(balance.is_negative());
    assert_eq!(balance.as_decimal(), dec!(-10));
}

#[test]
fn test_divide_exact() {
    let a = Amount::new(dec!(90));
    let quarter = a.divide(dec!(4)).unwrap();
    assert_eq!(quarter.as_decimal(), dec!(22.5));
}

#[test]
fn test_divide_inexact_recombines_within_tolerance() {
    let a = Amount::new(dec!(100));
    let third = a.divide(dec!(3)).unwrap();
    let recombined = third + third + third;

    assert!(recombined.approx_eq(a));
    assert_ne!(recombined.as_decimal(), a.as_decimal());
}

#[test]
fn test_divide_by_zero_is_an_error() {
    let a = Amount::new(dec!(1));
    assert_eq!(a.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
}

#[test]
fn test_round_to_cents_uses_bankers_rounding() {
    assert_eq!(
        Amount::new(dec!(2.125)).round_to_cents().as_decimal(),
        dec!(2.12)
    );
    assert_eq!(
        Amount::new(dec!(2.135)).round_to_cents().as_decimal(),
        dec!(2.14)
    );
}

#[test]
fn test_serde_round_trip() {
    let a = Amount::new(dec!(42.42));
    let json = serde_json::to_string(&a).unwrap();
    let back: Amount = serde_json::from_str(&json).unwrap();
    assert_eq!(a, back);
}

#[test]
fn test_deserializes_from_json_number() {
    let a: Amount = serde_json::from_str("19.99").unwrap();
    assert_eq!(a.as_decimal(), dec!(19.99));
}

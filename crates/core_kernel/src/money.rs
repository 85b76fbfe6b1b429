//! Monetary amounts with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! The service operates in a single implicit currency, so amounts carry no
//! currency tag.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount
///
/// Amounts are stored at full decimal precision; rounding to cents happens
/// only at the display boundary. Comparisons that must tolerate division
/// residue use [`Amount::approx_eq`] with an absolute tolerance of 1e-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new amount from a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from an integer number of minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self(Decimal::new(minor_units, 2))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to cents using banker's rounding (round half to even)
    pub fn round_to_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self(self.0 / divisor))
    }

    /// Compares two amounts within the service-wide absolute tolerance (1e-6)
    pub fn approx_eq(&self, other: Amount) -> bool {
        (self.0 - other.0).abs() <= dec!(0.000001)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_to_cents().0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_creation() {
        let a = Amount::new(dec!(100.50));
        assert_eq!(a.as_decimal(), dec!(100.50));
    }

    #[test]
    fn test_amount_from_minor() {
        let a = Amount::from_minor(10050);
        assert_eq!(a.as_decimal(), dec!(100.50));
    }

    #[test]
    fn test_amount_arithmetic() {
        let a = Amount::new(dec!(100.00));
        let b = Amount::new(dec!(50.00));

        assert_eq!((a + b).as_decimal(), dec!(150.00));
        assert_eq!((a - b).as_decimal(), dec!(50.00));
    }

    #[test]
    fn test_amount_sign_queries() {
        assert!(Amount::new(dec!(0.01)).is_positive());
        assert!(Amount::new(dec!(-0.01)).is_negative());
        assert!(Amount::zero().is_zero());
        assert!(!Amount::zero().is_positive());
        assert!(!Amount::zero().is_negative());
    }

    #[test]
    fn test_divide_by_zero() {
        let a = Amount::new(dec!(10));
        assert_eq!(a.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = Amount::new(dec!(100));
        let b = Amount::new(dec!(100.0000005));
        let c = Amount::new(dec!(100.001));

        assert!(a.approx_eq(b));
        assert!(!a.approx_eq(c));
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let third = Amount::new(dec!(100)).divide(dec!(3)).unwrap();
        assert_eq!(third.to_string(), "33.33");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn amount_arithmetic_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Amount::from_minor(a);
            let mb = Amount::from_minor(b);
            let mc = Amount::from_minor(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn division_recombines_within_tolerance(
            amount in 1i64..1_000_000_000i64,
            parts in 1u32..100u32
        ) {
            let total = Amount::from_minor(amount);
            let share = total.divide(Decimal::from(parts)).unwrap();
            let recombined: Amount = (0..parts).map(|_| share).sum();

            prop_assert!(recombined.approx_eq(total));
        }
    }
}

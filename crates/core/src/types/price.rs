//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as [`Decimal`] so totals are exact and the scale of the
//! source text survives a save/load cycle (`12.0` is written back as `12.0`).
//! A single price is capped at [`MAX_PRICE`] so that cart totals stay far
//! inside `Decimal`'s range.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

/// Largest accepted price, in whole currency units.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price must be a decimal number (got '{0}')")]
    Invalid(String),
    /// The input is a negative number.
    #[error("price cannot be negative (got '{0}')")]
    Negative(String),
    /// The input is above [`MAX_PRICE`].
    #[error("price cannot exceed 1000000000000 (got '{0}')")]
    TooLarge(String),
}

/// A non-negative price in the store's currency.
///
/// ## Examples
///
/// ```
/// use partshop_core::Price;
///
/// assert_eq!(Price::parse("45.5").unwrap().to_string(), "45.5");
/// assert_eq!(Price::parse(" 12.0 ").unwrap().to_string(), "12.0");
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("cheap").is_err());
/// assert!(Price::parse("-3").is_err());
/// assert!(Price::parse("79228162514264337593543950335").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero, or
    /// [`PriceError::TooLarge`] if it is above [`MAX_PRICE`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        Self::checked(amount, || amount.to_string())
    }

    /// Parse a price from text, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty or only whitespace
    /// - Is not a decimal number
    /// - Is negative
    /// - Is above [`MAX_PRICE`]
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount =
            Decimal::from_str(trimmed).map_err(|_| PriceError::Invalid(trimmed.to_owned()))?;

        Self::checked(amount, || trimmed.to_owned())
    }

    fn checked(amount: Decimal, text: impl FnOnce() -> String) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(text()));
        }
        if amount > Decimal::from(MAX_PRICE) {
            return Err(PriceError::TooLarge(text()));
        }
        Ok(Self(amount))
    }

    /// Returns true if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Both operands are non-negative, so the sum is too. Saturates at
// `Decimal::MAX`, which bounded prices only reach after ~10^16 additions.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.0.checked_add(rhs.0).map_or(Self(Decimal::MAX), Self)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert!(Price::parse("0").is_ok());
        assert!(Price::parse("45.5").is_ok());
        assert!(Price::parse("12.00").is_ok());
        assert!(Price::parse("1999").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("   "), Err(PriceError::Empty));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(
            Price::parse("twelve"),
            Err(PriceError::Invalid("twelve".to_owned()))
        );
        assert!(matches!(Price::parse("12,5"), Err(PriceError::Invalid(_))));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(
            Price::parse("-0.01"),
            Err(PriceError::Negative("-0.01".to_owned()))
        );
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(Price::new(Decimal::new(-1, 0)).is_err());
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_parse_rejects_amounts_above_max() {
        assert_eq!(
            Price::parse("79228162514264337593543950335"),
            Err(PriceError::TooLarge("79228162514264337593543950335".to_owned()))
        );
        assert!(matches!(
            Price::parse("1000000000000.01"),
            Err(PriceError::TooLarge(_))
        ));
        assert_eq!(Price::parse("1000000000000").unwrap().to_string(), "1000000000000");
        assert!(Price::new(Decimal::MAX).is_err());
    }

    #[test]
    fn test_sum_of_max_prices_does_not_overflow() {
        let max = Price::parse("1000000000000").unwrap();
        let total: Price = [max, max].iter().sum();
        assert_eq!(total.to_string(), "2000000000000");
    }

    #[test]
    fn test_add_saturates_instead_of_panicking() {
        let huge = Price(Decimal::MAX);
        let one = Price::parse("1").unwrap();
        assert_eq!(huge + one, huge);
        assert_eq!(huge + huge, huge);
    }

    #[test]
    fn test_display_preserves_scale() {
        assert_eq!(Price::parse("12.0").unwrap().to_string(), "12.0");
        assert_eq!(Price::parse("45.5").unwrap().to_string(), "45.5");
        assert_eq!(Price::parse("7").unwrap().to_string(), "7");
    }

    #[test]
    fn test_sum_is_exact() {
        let prices = [
            Price::parse("0.1").unwrap(),
            Price::parse("0.2").unwrap(),
        ];
        let total: Price = prices.iter().sum();
        assert_eq!(total.to_string(), "0.3");
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Price = core::iter::empty::<Price>().sum();
        assert!(total.is_zero());
        assert_eq!(total.to_string(), "0");
    }
}

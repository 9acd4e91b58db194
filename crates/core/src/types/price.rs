//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are currency-agnostic decimal amounts in the store's display
//! unit (not minor units). The catalog and cart never do float math.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price amount.
///
/// Wraps [`Decimal`] so that the non-negative invariant is established at
/// construction and arithmetic on prices stays exact.
///
/// ## Examples
///
/// ```
/// use mercato_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(4999, 2)).unwrap(); // 49.99
/// assert_eq!(price.to_string(), "49.99");
/// assert!(Price::new(Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Whether this price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let result = Price::new(Decimal::new(-100, 2));
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_times() {
        let price = Price::from_units(50);
        assert_eq!(price.times(3), Price::from_units(150));
        assert_eq!(price.times(0), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_units(100), Price::from_units(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_units(350));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Price = core::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_units(1299).to_string(), "1299.00");
        let price = Price::new(Decimal::new(129997, 2)).unwrap();
        assert_eq!(price.to_string(), "1299.97");
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_units(100) < Price::from_units(200));
    }
}

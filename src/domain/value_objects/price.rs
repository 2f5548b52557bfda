//! # Price
//!
//! Non-negative monetary amount in euros.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::format_fixed;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative price.
///
/// # Examples
///
/// ```
/// use carrier_select::domain::value_objects::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(2800, 2)).unwrap();
/// assert_eq!(price.to_string(), "28.00 €");
/// assert!(Price::new(Decimal::NEGATIVE_ONE).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_price(format!(
                "price must not be negative, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying amount.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the price is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} €", format_fixed(self.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert!(Price::new(Decimal::ZERO).unwrap().is_zero());
        assert_eq!(Price::new(Decimal::new(35, 0)).unwrap().get(), Decimal::new(35, 0));
    }

    #[test]
    fn rejects_negative() {
        let err = Price::new(Decimal::new(-1, 2)).unwrap_err();
        assert!(err.to_string().contains("-0.01"));
    }

    #[test]
    fn orders_by_amount() {
        let cheap = Price::new(Decimal::new(28, 0)).unwrap();
        let dear = Price::new(Decimal::new(45, 0)).unwrap();
        assert!(cheap < dear);
    }

    #[test]
    fn serde_uses_decimal_string() {
        let price = Price::new(Decimal::new(2800, 2)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"28.00\"");
    }

    #[test]
    fn deserialize_rejects_negative() {
        let price: Price = serde_json::from_str("\"28.00\"").unwrap();
        assert_eq!(price.get(), Decimal::new(2800, 2));
        assert!(serde_json::from_str::<Price>("\"-3.50\"").is_err());
    }
}

//! # Tier Range
//!
//! The metric interval a tier prices.
//!
//! The upper bound is an `Option`: `None` marks an open-ended top tier, so no
//! numeric sentinel can be mistaken for a legitimate large bound.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::format_fixed;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tier's metric interval, `min <= value <= max` (or unbounded above).
///
/// # Examples
///
/// ```
/// use carrier_select::domain::value_objects::TierRange;
/// use rust_decimal::Decimal;
///
/// let range = TierRange::new(Decimal::new(50, 0), Some(Decimal::new(100, 0))).unwrap();
/// assert!(range.contains(Decimal::new(58, 0)));
/// assert!(!range.contains(Decimal::new(500, 0)));
/// assert_eq!(range.to_string(), "[50.00 - 100.00]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawTierRange")]
pub struct TierRange {
    min: Decimal,
    max: Option<Decimal>,
}

/// Unchecked wire shape of [`TierRange`].
#[derive(Deserialize)]
struct RawTierRange {
    min: Decimal,
    max: Option<Decimal>,
}

impl TryFrom<RawTierRange> for TierRange {
    type Error = DomainError;

    fn try_from(raw: RawTierRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl TierRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTierRange` if `min` is negative or
    /// `max` is below `min`.
    pub fn new(min: Decimal, max: Option<Decimal>) -> DomainResult<Self> {
        if min.is_sign_negative() && !min.is_zero() {
            return Err(DomainError::invalid_tier_range(format!(
                "lower bound must not be negative, got {min}"
            )));
        }
        if let Some(max) = max.filter(|max| *max < min) {
            return Err(DomainError::invalid_tier_range(format!(
                "upper bound {max} is below lower bound {min}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates an open-ended range starting at `min`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTierRange` if `min` is negative.
    pub fn open_ended(min: Decimal) -> DomainResult<Self> {
        Self::new(min, None)
    }

    /// Returns the lower bound.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Returns the upper bound, `None` when open-ended.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> Option<Decimal> {
        self.max
    }

    /// Returns true if there is no upper bound.
    #[inline]
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }

    /// Returns true if `value` falls inside the range.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && self.max.is_none_or(|max| value <= max)
    }
}

impl fmt::Display for TierRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{} - {}]", format_fixed(self.min), format_fixed(max)),
            None => write!(f, "[{} - ∞]", format_fixed(self.min)),
        }
    }
}

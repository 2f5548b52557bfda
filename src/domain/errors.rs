//! # Domain Errors
//!
//! Validation and business-rule failures raised by entities, value objects
//! and domain services.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::enums::ParseEnumError;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Order line quantity is not a positive integer.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A physical measure (weight, volume) is out of range.
    #[error("invalid measure: {0}")]
    InvalidMeasure(String),

    /// A price is out of range.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A tier range has inconsistent bounds.
    #[error("invalid tier range: {0}")]
    InvalidTierRange(String),

    /// A region label is malformed.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// A stored tag does not name a known variant.
    #[error(transparent)]
    Parse(#[from] ParseEnumError),

    /// Checked arithmetic failed.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid quantity error.
    #[must_use]
    pub fn invalid_quantity(message: impl Into<String>) -> Self {
        Self::InvalidQuantity(message.into())
    }

    /// Creates an invalid measure error.
    #[must_use]
    pub fn invalid_measure(message: impl Into<String>) -> Self {
        Self::InvalidMeasure(message.into())
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid tier range error.
    #[must_use]
    pub fn invalid_tier_range(message: impl Into<String>) -> Self {
        Self::InvalidTierRange(message.into())
    }

    /// Creates an invalid region error.
    #[must_use]
    pub fn invalid_region(message: impl Into<String>) -> Self {
        Self::InvalidRegion(message.into())
    }

    /// Returns true if this error points at inconsistent stored data rather
    /// than bad caller input.
    ///
    /// An unrecognized calculation method means a service row carries a tag
    /// the resolver does not implement.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

//! # Checked Arithmetic
//!
//! Safe decimal arithmetic for weights, volumes and prices.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for non-panicking decimal operations
//! - [`percentage_of`] - Share of one amount relative to another, in percent
//! - [`round_for_display`] - Two-decimal rounding used in human-readable output
//!
//! Shipment totals feed tier comparisons directly, so everything here stays
//! in [`Decimal`] and never round-trips through binary floating point.
//!
//! # Examples
//!
//! ```
//! use carrier_select::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let unit_weight = Decimal::new(75, 1); // 7.5 kg
//! let total = unit_weight.safe_mul(Decimal::from(4u32)).unwrap();
//! assert_eq!(total, Decimal::new(30, 0));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places shown in breakdowns and reports.
pub const DISPLAY_SCALE: u32 = 2;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Every method returns `Err` instead of panicking on overflow, underflow
/// or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Returns `part / whole × 100`.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if `whole` is zero.
///
/// # Examples
///
/// ```
/// use carrier_select::domain::value_objects::arithmetic::percentage_of;
/// use rust_decimal::Decimal;
///
/// let pct = percentage_of(Decimal::new(17, 0), Decimal::new(45, 0)).unwrap();
/// assert_eq!(pct.round_dp(1), Decimal::new(378, 1));
/// ```
pub fn percentage_of(part: Decimal, whole: Decimal) -> ArithmeticResult<Decimal> {
    part.safe_div(whole)?.safe_mul(Decimal::ONE_HUNDRED)
}

/// Rounds to [`DISPLAY_SCALE`] places, half away from zero.
///
/// `Decimal`'s `{:.2}` formatting truncates, so values are rounded here
/// before they are rendered.
#[inline]
#[must_use]
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly [`DISPLAY_SCALE`] decimal places.
#[must_use]
pub fn format_fixed(value: Decimal) -> String {
    format!(
        "{:.prec$}",
        round_for_display(value),
        prec = DISPLAY_SCALE as usize
    )
}

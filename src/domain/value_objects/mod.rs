//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`CarrierId`], [`ServiceId`], [`TierId`], [`ProductId`], [`OrderId`]:
//!   integer identifiers, one type per entity
//!
//! ## Numeric Types
//!
//! - [`Price`]: non-negative decimal amount
//! - [`TierRange`]: metric interval with an optional upper bound
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe decimal operations
//!
//! ## Domain Enums
//!
//! - [`DeliveryType`]: curbside, home delivery, home delivery with installation
//! - [`CalculationMethod`]: weight, volume or pallet pricing
//! - [`Region`]: destination province or the `NATIONAL` fallback

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod price;
pub mod region;
pub mod tier_range;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{CalculationMethod, DeliveryType, ParseEnumError};
pub use ids::{CarrierId, OrderId, ProductId, ServiceId, TierId};
pub use price::Price;
pub use region::{NATIONAL, Region};
pub use tier_range::TierRange;

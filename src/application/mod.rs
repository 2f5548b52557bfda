//! # Application Layer
//!
//! Use cases over the domain model: quoting services and ranking carriers
//! for an order.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};

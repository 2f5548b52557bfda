//! # Domain Layer
//!
//! Entities, value objects and the pure calculations of carrier rate
//! resolution. Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};

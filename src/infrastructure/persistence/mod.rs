//! # Persistence Layer
//!
//! Repository ports and their implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`CarrierRepository`]: carriers and their services
//! - [`TierRepository`]: rate tiers
//! - [`OrderRepository`]: orders with resolved products
//!
//! ## Implementations
//!
//! - `in_memory`: in-process storage for tests and benchmarks
//! - `postgres`: PostgreSQL via sqlx

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use traits::{
    CarrierRepository, OrderRepository, RepositoryError, RepositoryResult, TierRepository,
};

//! # In-Memory Repositories
//!
//! In-memory implementations for tests and benchmarks without database
//! dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemoryCarrierRepository`]: carriers and services
//! - [`InMemoryTierRepository`]: rate tiers
//! - [`InMemoryOrderRepository`]: orders and the product catalog
//!
//! ## Thread Safety
//!
//! Carriers and orders sit behind `Arc<RwLock<..>>`; tiers use a `DashMap`.

pub mod carrier_repository;
pub mod order_repository;
pub mod tier_repository;

pub use carrier_repository::InMemoryCarrierRepository;
pub use order_repository::InMemoryOrderRepository;
pub use tier_repository::InMemoryTierRepository;

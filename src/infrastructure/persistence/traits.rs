//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The ranking engine reads carriers, rate tiers and orders through these
//! traits only. Implementations exist for in-memory storage (tests,
//! benchmarks) and PostgreSQL.
//!
//! # Available Repositories
//!
//! - [`CarrierRepository`]: carriers and their services
//! - [`TierRepository`]: rate tiers per service and region
//! - [`OrderRepository`]: orders with their products attached
//!
//! # Examples
//!
//! ```ignore
//! use carrier_select::infrastructure::persistence::traits::CarrierRepository;
//!
//! async fn count_curbside(repo: &impl CarrierRepository) {
//!     let offerings = repo.find_active_offerings(DeliveryType::Curbside).await.unwrap();
//!     println!("{} curbside services", offerings.len());
//! }
//! ```

use crate::domain::entities::{Carrier, CarrierService, ResolvedOrder, ServiceOffering, Tier, TierRecord};
use crate::domain::value_objects::{CarrierId, DeliveryType, OrderId, Region, ServiceId, TierId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// A stored value could not be mapped onto the domain model.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl fmt::Display) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Returns true if stored data failed to map onto the domain model.
    ///
    /// This indicates corrupt or out-of-vocabulary rows, such as an
    /// unrecognized calculation method, rather than a transient failure.
    #[must_use]
    pub fn is_data_defect(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for carriers and their services.
///
/// # Examples
///
/// ```ignore
/// async fn example(repo: &impl CarrierRepository) {
///     let offerings = repo.find_active_offerings(DeliveryType::HomeDelivery).await?;
///     let carrier = repo.get_carrier(CarrierId::new(1)).await?;
/// }
/// ```
#[async_trait]
pub trait CarrierRepository: Send + Sync + fmt::Debug {
    /// Finds every active service offering `delivery_type` whose carrier is
    /// also active.
    ///
    /// Results are ordered by carrier ID, then service ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if a stored service carries
    /// an unrecognized delivery type or calculation method.
    async fn find_active_offerings(
        &self,
        delivery_type: DeliveryType,
    ) -> RepositoryResult<Vec<ServiceOffering>>;

    /// Gets a carrier by ID.
    ///
    /// Returns `None` if the carrier does not exist.
    async fn get_carrier(&self, id: CarrierId) -> RepositoryResult<Option<Carrier>>;

    /// Finds all services of a carrier, active or not, ordered by ID.
    async fn find_services(&self, carrier_id: CarrierId) -> RepositoryResult<Vec<CarrierService>>;
}

/// Repository for rate tiers.
#[async_trait]
pub trait TierRepository: Send + Sync + fmt::Debug {
    /// Finds tiers of `service_id` in any of `regions` whose range contains
    /// `metric`.
    ///
    /// Callers pass the destination plus `NATIONAL`; choosing among the
    /// returned candidates is left to the caller.
    async fn find_matching(
        &self,
        service_id: ServiceId,
        regions: &[Region],
        metric: Decimal,
    ) -> RepositoryResult<Vec<Tier>>;

    /// Finds every tier of a service, ordered by region, then lower bound.
    async fn find_by_service(&self, service_id: ServiceId) -> RepositoryResult<Vec<Tier>>;

    /// Inserts or updates a tier.
    ///
    /// A record with an ID updates that tier. A record without one updates
    /// the price of the tier sharing its service, region and range, or
    /// inserts a new tier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the record names an ID that
    /// does not exist.
    async fn upsert(&self, record: TierRecord) -> RepositoryResult<TierId>;
}

/// Repository for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync + fmt::Debug {
    /// Gets an order with its lines' products attached.
    ///
    /// Returns `None` if the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if a line references a product
    /// that does not exist.
    async fn get_resolved(&self, id: OrderId) -> RepositoryResult<Option<ResolvedOrder>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod repository_error {
        use super::*;

        #[test]
        fn not_found_error() {
            let err = RepositoryError::not_found("Order", OrderId::new(9));
            assert!(err.is_not_found());
            assert!(!err.is_duplicate());
            assert!(err.to_string().contains("not found"));
            assert!(err.to_string().contains("Order"));
            assert!(err.to_string().contains('9'));
        }

        #[test]
        fn duplicate_error() {
            let err = RepositoryError::duplicate("Tier", TierId::new(4));
            assert!(!err.is_not_found());
            assert!(err.is_duplicate());
            assert!(err.to_string().contains("Duplicate"));
        }

        #[test]
        fn serialization_is_a_data_defect() {
            let err = RepositoryError::serialization("unrecognized calculation method 'parcel'");
            assert!(err.is_data_defect());
            assert!(err.to_string().contains("parcel"));
            assert!(!RepositoryError::query("syntax").is_data_defect());
        }

        #[test]
        fn store_failures_are_not_data_defects() {
            for err in [
                RepositoryError::connection("Connection refused"),
                RepositoryError::query("syntax error at or near"),
            ] {
                assert!(!err.is_data_defect());
                assert!(!err.is_not_found());
            }
        }

        #[test]
        fn connection_error() {
            let err = RepositoryError::connection("Connection refused");
            assert!(err.to_string().contains("Connection"));
            assert!(err.to_string().contains("refused"));
        }
    }
}

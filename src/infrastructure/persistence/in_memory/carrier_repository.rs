//! # In-Memory Carrier Repository
//!
//! In-memory implementation of [`CarrierRepository`] for tests and
//! benchmarks.
//!
//! Carriers and services live in ordered maps, so offerings come back in
//! carrier ID, then service ID order just like the PostgreSQL query.

use crate::domain::entities::{Carrier, CarrierService, ServiceOffering};
use crate::domain::value_objects::{CarrierId, DeliveryType, ServiceId};
use crate::infrastructure::persistence::traits::{
    CarrierRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct CarrierStore {
    carriers: BTreeMap<CarrierId, Carrier>,
    services: BTreeMap<ServiceId, CarrierService>,
}

/// In-memory implementation of [`CarrierRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryCarrierRepository {
    storage: Arc<RwLock<CarrierStore>>,
}

impl InMemoryCarrierRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a carrier.
    pub async fn save_carrier(&self, carrier: Carrier) {
        let mut storage = self.storage.write().await;
        storage.carriers.insert(carrier.id(), carrier);
    }

    /// Inserts or replaces a service.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the owning carrier has not
    /// been saved.
    pub async fn save_service(&self, service: CarrierService) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if !storage.carriers.contains_key(&service.carrier_id()) {
            return Err(RepositoryError::not_found("Carrier", service.carrier_id()));
        }
        storage.services.insert(service.id(), service);
        Ok(())
    }

    /// Returns the number of carriers in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.carriers.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository holds no carriers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all carriers and services.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.carriers.clear();
        storage.services.clear();
    }
}

#[async_trait]
impl CarrierRepository for InMemoryCarrierRepository {
    async fn find_active_offerings(
        &self,
        delivery_type: DeliveryType,
    ) -> RepositoryResult<Vec<ServiceOffering>> {
        let storage = self.storage.read().await;
        let mut offerings: Vec<ServiceOffering> = storage
            .services
            .values()
            .filter(|s| s.is_active() && s.delivery_type() == delivery_type)
            .filter_map(|service| {
                let carrier = storage.carriers.get(&service.carrier_id())?;
                ServiceOffering::new(carrier.clone(), service.clone())
            })
            .filter(ServiceOffering::is_available)
            .collect();
        offerings.sort_by_key(|o| (o.carrier().id(), o.service().id()));
        Ok(offerings)
    }

    async fn get_carrier(&self, id: CarrierId) -> RepositoryResult<Option<Carrier>> {
        let storage = self.storage.read().await;
        Ok(storage.carriers.get(&id).cloned())
    }

    async fn find_services(&self, carrier_id: CarrierId) -> RepositoryResult<Vec<CarrierService>> {
        let storage = self.storage.read().await;
        Ok(storage
            .services
            .values()
            .filter(|s| s.carrier_id() == carrier_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CalculationMethod;

    fn service(id: i64, carrier: i64, delivery: DeliveryType) -> CarrierService {
        CarrierService::new(
            ServiceId::new(id),
            CarrierId::new(carrier),
            delivery,
            CalculationMethod::Weight,
        )
    }

    async fn seeded() -> InMemoryCarrierRepository {
        let repo = InMemoryCarrierRepository::new();
        repo.save_carrier(Carrier::new(CarrierId::new(2), "GLS")).await;
        repo.save_carrier(Carrier::new(CarrierId::new(1), "SEUR")).await;
        repo.save_carrier(Carrier::new(CarrierId::new(3), "Old Freight").with_active(false))
            .await;

        repo.save_service(service(20, 2, DeliveryType::Curbside)).await.unwrap();
        repo.save_service(service(10, 1, DeliveryType::Curbside)).await.unwrap();
        repo.save_service(service(11, 1, DeliveryType::HomeDelivery)).await.unwrap();
        repo.save_service(service(12, 1, DeliveryType::Curbside).with_active(false))
            .await
            .unwrap();
        repo.save_service(service(30, 3, DeliveryType::Curbside)).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryCarrierRepository::new();
        assert!(repo.is_empty());
        assert!(repo.find_active_offerings(DeliveryType::Curbside).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn offerings_exclude_inactive_and_other_delivery_types() {
        let repo = seeded().await;
        let offerings = repo.find_active_offerings(DeliveryType::Curbside).await.unwrap();

        let ids: Vec<_> = offerings.iter().map(|o| o.service().id().get()).collect();
        assert_eq!(ids, vec![10, 20]);
        assert!(offerings.iter().all(ServiceOffering::is_available));
    }

    #[tokio::test]
    async fn offerings_are_ordered_by_carrier_then_service() {
        let repo = seeded().await;
        repo.save_service(service(5, 2, DeliveryType::Curbside)).await.unwrap();

        let offerings = repo.find_active_offerings(DeliveryType::Curbside).await.unwrap();
        let keys: Vec<_> = offerings
            .iter()
            .map(|o| (o.carrier().id().get(), o.service().id().get()))
            .collect();
        assert_eq!(keys, vec![(1, 10), (2, 5), (2, 20)]);
    }

    #[tokio::test]
    async fn service_requires_existing_carrier() {
        let repo = InMemoryCarrierRepository::new();
        let err = repo
            .save_service(service(1, 99, DeliveryType::Curbside))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn get_carrier_and_services() {
        let repo = seeded().await;
        assert_eq!(repo.get_carrier(CarrierId::new(1)).await.unwrap().unwrap().name(), "SEUR");
        assert!(repo.get_carrier(CarrierId::new(42)).await.unwrap().is_none());

        let services = repo.find_services(CarrierId::new(1)).await.unwrap();
        assert_eq!(services.len(), 3);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let repo = seeded().await;
        assert_eq!(repo.len(), 3);
        repo.clear().await;
        assert!(repo.is_empty());
    }
}

//! # In-Memory Tier Repository
//!
//! In-memory implementation of [`TierRepository`] for tests and benchmarks.
//!
//! Uses [`DashMap`] keyed by tier ID. IDs are allocated from an atomic
//! counter starting at 1.
//!
//! # Examples
//!
//! ```
//! use carrier_select::infrastructure::persistence::in_memory::InMemoryTierRepository;
//!
//! let repo = InMemoryTierRepository::new();
//! assert_eq!(repo.tier_count(), 0);
//! ```

use crate::domain::entities::{Tier, TierRecord};
use crate::domain::value_objects::{Region, ServiceId, TierId};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TierRepository,
};
use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;

/// In-memory implementation of [`TierRepository`].
#[derive(Debug)]
pub struct InMemoryTierRepository {
    tiers: DashMap<TierId, Tier>,
    next_id: AtomicI64,
    /// Serializes upserts so natural-key lookups and inserts don't race.
    write_lock: Mutex<()>,
}

impl InMemoryTierRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiers: DashMap::new(),
            next_id: AtomicI64::new(1),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the number of stored tiers.
    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    fn allocate_id(&self) -> TierId {
        TierId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn find_by_key(&self, record: &TierRecord) -> Option<TierId> {
        self.tiers
            .iter()
            .filter(|entry| record.matches_key(entry.value()))
            .map(|entry| *entry.key())
            .min()
    }
}

impl Default for InMemoryTierRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TierRepository for InMemoryTierRepository {
    async fn find_matching(
        &self,
        service_id: ServiceId,
        regions: &[Region],
        metric: Decimal,
    ) -> RepositoryResult<Vec<Tier>> {
        let mut matching: Vec<Tier> = self
            .tiers
            .iter()
            .filter(|entry| {
                let tier = entry.value();
                tier.service_id() == service_id
                    && regions.contains(tier.region())
                    && tier.range().contains(metric)
            })
            .map(|entry| entry.value().clone())
            .collect();
        matching.sort_by_key(Tier::id);
        Ok(matching)
    }

    async fn find_by_service(&self, service_id: ServiceId) -> RepositoryResult<Vec<Tier>> {
        let mut tiers: Vec<Tier> = self
            .tiers
            .iter()
            .filter(|entry| entry.value().service_id() == service_id)
            .map(|entry| entry.value().clone())
            .collect();
        tiers.sort_by(|a, b| {
            (a.region(), a.range().min(), a.id()).cmp(&(b.region(), b.range().min(), b.id()))
        });
        Ok(tiers)
    }

    async fn upsert(&self, record: TierRecord) -> RepositoryResult<TierId> {
        let _guard = self.write_lock.lock().await;

        let id = match record.id {
            Some(id) if self.tiers.contains_key(&id) => id,
            Some(id) => return Err(RepositoryError::not_found("Tier", id)),
            None => match self.find_by_key(&record) {
                Some(existing) => existing,
                None => {
                    let id = self.allocate_id();
                    self.tiers.insert(id, record.into_tier(id));
                    return Ok(id);
                }
            },
        };

        self.tiers.insert(id, record.into_tier(id));
        Ok(id)
    }
}

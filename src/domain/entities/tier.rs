//! # Tier Entity
//!
//! A priced metric range of one carrier service for one region.
//!
//! Within a (service, region) pair tiers are expected not to overlap and to
//! cover the metric contiguously from zero. That is a property of the rate
//! table, not something checked on write; the resolver still picks
//! deterministically when the table breaks it.

use crate::domain::value_objects::{Price, Region, ServiceId, TierId, TierRange};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    id: TierId,
    service_id: ServiceId,
    region: Region,
    range: TierRange,
    price: Price,
}

impl Tier {
    /// Creates a tier.
    #[must_use]
    pub fn new(
        id: TierId,
        service_id: ServiceId,
        region: Region,
        range: TierRange,
        price: Price,
    ) -> Self {
        Self {
            id,
            service_id,
            region,
            range,
            price,
        }
    }

    /// Returns the tier ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TierId {
        self.id
    }

    /// Returns the owning service's ID.
    #[inline]
    #[must_use]
    pub fn service_id(&self) -> ServiceId {
        self.service_id
    }

    /// Returns the region this tier applies to.
    #[inline]
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the metric range.
    #[inline]
    #[must_use]
    pub fn range(&self) -> &TierRange {
        &self.range
    }

    /// Returns the fixed price for any metric inside the range.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns true if this tier applies to `region` for `metric`, either
    /// directly or as the national fallback.
    #[must_use]
    pub fn serves(&self, region: &Region, metric: Decimal) -> bool {
        (self.region == *region || self.region.is_national()) && self.range.contains(metric)
    }

    /// Replaces the price, keeping identity and range.
    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    /// Returns the import/export shape of this tier.
    #[must_use]
    pub fn to_record(&self) -> TierRecord {
        TierRecord {
            id: Some(self.id),
            service_id: self.service_id,
            region: self.region.clone(),
            range: self.range,
            price: self.price,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tier({} service={} region={} range={} price={})",
            self.id, self.service_id, self.region, self.range, self.price
        )
    }
}

/// Tier shape exchanged with bulk import/export tools.
///
/// Without an `id` a record is matched on (service, region, range).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRecord {
    /// Stable identifier, when the record came from an export.
    pub id: Option<TierId>,
    /// Owning service.
    pub service_id: ServiceId,
    /// Region label.
    pub region: Region,
    /// Metric range.
    pub range: TierRange,
    /// Fixed price.
    pub price: Price,
}

impl TierRecord {
    /// Creates a record without an identifier.
    #[must_use]
    pub fn new(service_id: ServiceId, region: Region, range: TierRange, price: Price) -> Self {
        Self {
            id: None,
            service_id,
            region,
            range,
            price,
        }
    }

    /// Returns true if `tier` has the same natural key (service, region, range).
    #[must_use]
    pub fn matches_key(&self, tier: &Tier) -> bool {
        self.service_id == tier.service_id && self.region == tier.region && self.range == tier.range
    }

    /// Materializes the record as a tier with the given ID.
    #[must_use]
    pub fn into_tier(self, id: TierId) -> Tier {
        Tier::new(id, self.service_id, self.region, self.range, self.price)
    }
}

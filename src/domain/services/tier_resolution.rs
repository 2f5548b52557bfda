//! # Tier Resolution
//!
//! Picks the tier that prices a metric value for a destination.
//!
//! Candidates qualify when their region is the destination or `NATIONAL`
//! and their range contains the metric. Among qualifying tiers:
//!
//! 1. an exact-region tier beats a `NATIONAL` tier;
//! 2. then the highest lower bound wins, so a value sitting on the boundary
//!    shared by two contiguous tiers (`[50, 100]`, `[100, 200]`) lands in the
//!    upper one;
//! 3. then the lowest tier ID wins.
//!
//! Rules 2 and 3 only matter when a rate table has overlapping tiers or
//! shared boundaries; the order is total, so the result never depends on
//! storage iteration order.
//!
//! [`select_tier`] is the pure rule. [`TierResolver`] fetches candidates
//! from a [`TierRepository`] and applies it; it keeps no cache.
//!
//! # Examples
//!
//! ```ignore
//! use carrier_select::domain::services::tier_resolution::TierResolver;
//! use std::sync::Arc;
//!
//! let resolver = TierResolver::new(Arc::new(tiers));
//! let tier = resolver.resolve(service_id, &region, metric).await?;
//! ```

use crate::domain::entities::Tier;
use crate::domain::value_objects::{Region, ServiceId};
use crate::infrastructure::persistence::traits::{RepositoryResult, TierRepository};
use rust_decimal::Decimal;
use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

/// How closely a tier's region matches the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    /// The tier names the destination itself.
    Exact,
    /// The tier is the national fallback.
    National,
}

impl Specificity {
    /// Classifies `tier` against `destination`.
    ///
    /// Returns `None` if the tier serves neither the destination nor the
    /// national fallback.
    #[must_use]
    pub fn of(tier: &Tier, destination: &Region) -> Option<Self> {
        if tier.region() == destination {
            Some(Self::Exact)
        } else if tier.region().is_national() {
            Some(Self::National)
        } else {
            None
        }
    }
}

/// Precedence between two qualifying tiers; `Less` means `a` is preferred.
fn precedence(a: (&Tier, Specificity), b: (&Tier, Specificity)) -> Ordering {
    let key = |(tier, specificity): (&Tier, Specificity)| {
        (specificity, Reverse(tier.range().min()), tier.id())
    };
    key(a).cmp(&key(b))
}

/// Selects the tier pricing `metric` for `destination` among `candidates`.
///
/// Returns `None` if no candidate qualifies.
///
/// # Examples
///
/// ```
/// use carrier_select::domain::entities::Tier;
/// use carrier_select::domain::services::tier_resolution::select_tier;
/// use carrier_select::domain::value_objects::*;
/// use rust_decimal::Decimal;
///
/// let tier = |id, region: &str, price| Tier::new(
///     TierId::new(id),
///     ServiceId::new(1),
///     Region::new(region).unwrap(),
///     TierRange::new(Decimal::ZERO, Some(Decimal::new(100, 0))).unwrap(),
///     Price::new(Decimal::new(price, 0)).unwrap(),
/// );
/// let candidates = [tier(1, "NATIONAL", 35), tier(2, "Madrid", 28)];
///
/// let madrid = Region::new("Madrid").unwrap();
/// let chosen = select_tier(&candidates, &madrid, Decimal::new(58, 0)).unwrap();
/// assert_eq!(chosen.id(), TierId::new(2));
/// ```
#[must_use]
pub fn select_tier<'a>(
    candidates: &'a [Tier],
    destination: &Region,
    metric: Decimal,
) -> Option<&'a Tier> {
    candidates
        .iter()
        .filter(|tier| tier.range().contains(metric))
        .filter_map(|tier| Specificity::of(tier, destination).map(|s| (tier, s)))
        .min_by(|a, b| precedence(*a, *b))
        .map(|(tier, _)| tier)
}

/// Returns true if more than one qualifying tier shares the winner's
/// specificity, which means the rate table overlaps at `metric`.
///
/// Contiguous tiers meeting at `metric` (one ending there, the next starting
/// there) are not an overlap.
#[must_use]
pub fn has_ambiguous_match(candidates: &[Tier], destination: &Region, metric: Decimal) -> bool {
    let matching: Vec<(&Tier, Specificity)> = candidates
        .iter()
        .filter(|tier| tier.range().contains(metric))
        .filter_map(|tier| Specificity::of(tier, destination).map(|s| (tier, s)))
        .collect();
    let Some(winner) = matching.iter().map(|(_, s)| *s).min() else {
        return false;
    };
    let level: Vec<&Tier> = matching
        .into_iter()
        .filter(|(_, s)| *s == winner)
        .map(|(tier, _)| tier)
        .collect();

    let starts_here = level.iter().any(|tier| tier.range().min() == metric);
    let effective = level
        .iter()
        .filter(|tier| !(starts_here && tier.range().max() == Some(metric)))
        .count();
    effective > 1
}

/// Resolves the tier pricing a metric for one service and destination.
#[derive(Debug, Clone)]
pub struct TierResolver {
    tiers: Arc<dyn TierRepository>,
}

impl TierResolver {
    /// Creates a resolver reading from `tiers`.
    #[must_use]
    pub fn new(tiers: Arc<dyn TierRepository>) -> Self {
        Self { tiers }
    }

    /// Finds the tier of `service_id` pricing `metric` for `destination`.
    ///
    /// Returns `Ok(None)` when the service has neither a destination tier
    /// nor a national tier covering the metric.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn resolve(
        &self,
        service_id: ServiceId,
        destination: &Region,
        metric: Decimal,
    ) -> RepositoryResult<Option<Tier>> {
        let candidates = self
            .tiers
            .find_matching(service_id, &destination.lookup_set(), metric)
            .await?;

        if has_ambiguous_match(&candidates, destination, metric) {
            tracing::warn!(
                service_id = %service_id,
                region = %destination,
                metric = %metric,
                "overlapping tiers match the same metric"
            );
        }

        let chosen = select_tier(&candidates, destination, metric).cloned();
        match &chosen {
            Some(tier) => tracing::debug!(
                service_id = %service_id,
                region = %destination,
                metric = %metric,
                tier_id = %tier.id(),
                tier_region = %tier.region(),
                "tier resolved"
            ),
            None => tracing::debug!(
                service_id = %service_id,
                region = %destination,
                metric = %metric,
                "no applicable tier"
            ),
        }
        Ok(chosen)
    }
}

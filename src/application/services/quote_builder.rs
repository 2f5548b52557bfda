//! # Quote Builder
//!
//! Prices one service offering for one shipment.
//!
//! The builder picks the metric matching the service's calculation method,
//! resolves the tier for the destination and turns the match into a
//! [`ShippingQuote`]. A service without an applicable tier yields no quote.

use crate::application::error::ApplicationResult;
use crate::domain::entities::{ServiceOffering, ShippingQuote};
use crate::domain::services::{ShipmentMetrics, TierResolver};
use crate::domain::value_objects::Region;
use crate::infrastructure::persistence::TierRepository;
use std::sync::Arc;

/// Builds shipping quotes from resolved tiers.
#[derive(Debug, Clone)]
pub struct QuoteBuilder {
    resolver: TierResolver,
}

impl QuoteBuilder {
    /// Creates a builder reading tiers from `tiers`.
    #[must_use]
    pub fn new(tiers: Arc<dyn TierRepository>) -> Self {
        Self {
            resolver: TierResolver::new(tiers),
        }
    }

    /// Quotes `offering` for a shipment with `metrics` bound for `destination`.
    ///
    /// Returns `Ok(None)` when the service has no applicable tier.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if tiers cannot be read.
    pub async fn build(
        &self,
        offering: &ServiceOffering,
        destination: &Region,
        metrics: &ShipmentMetrics,
    ) -> ApplicationResult<Option<ShippingQuote>> {
        let service = offering.service();
        let metric = metrics.value_for(service.calculation_method());

        let tier = self.resolver.resolve(service.id(), destination, metric).await?;

        Ok(tier.map(|tier| ShippingQuote::from_tier(offering, &tier, metric)))
    }
}

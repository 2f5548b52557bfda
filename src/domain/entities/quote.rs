//! # Shipping Quote Entity
//!
//! A priced offer from one carrier service for one order.
//!
//! Quotes are fully populated value snapshots: the presentation layer can
//! render them without touching the data store again.
//!
//! # Examples
//!
//! ```
//! use carrier_select::domain::entities::{Carrier, CarrierService, ServiceOffering, ShippingQuote, Tier};
//! use carrier_select::domain::value_objects::*;
//! use rust_decimal::Decimal;
//!
//! let carrier = Carrier::new(CarrierId::new(1), "SEUR");
//! let service = CarrierService::new(
//!     ServiceId::new(1),
//!     CarrierId::new(1),
//!     DeliveryType::Curbside,
//!     CalculationMethod::Weight,
//! );
//! let offering = ServiceOffering::new(carrier, service).unwrap();
//! let tier = Tier::new(
//!     TierId::new(1),
//!     ServiceId::new(1),
//!     Region::new("Madrid").unwrap(),
//!     TierRange::new(Decimal::new(50, 0), Some(Decimal::new(100, 0))).unwrap(),
//!     Price::new(Decimal::new(2800, 2)).unwrap(),
//! );
//!
//! let quote = ShippingQuote::from_tier(&offering, &tier, Decimal::new(58, 0));
//! assert_eq!(quote.breakdown(), "58.00 kg in range [50.00 - 100.00] = 28.00 €");
//! ```

use crate::domain::entities::carrier::ServiceOffering;
use crate::domain::entities::tier::Tier;
use crate::domain::value_objects::arithmetic::format_fixed;
use crate::domain::value_objects::{
    CalculationMethod, CarrierId, DeliveryType, Price, Region, ServiceId, TierId, TierRange,
};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced offer from one service for one order.
///
/// # Invariants
///
/// - `price` equals the matched tier's price
/// - `tier_range` contains `metric_value`
/// - `tier_region` is the region of the matched tier, which is `NATIONAL`
///   whenever the destination had no tier of its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ShippingQuote {
    carrier_id: CarrierId,
    carrier_name: String,
    service_id: ServiceId,
    delivery_type: DeliveryType,
    calculation_method: CalculationMethod,
    price: Price,
    metric_value: Decimal,
    tier_id: TierId,
    tier_region: Region,
    tier_range: TierRange,
    breakdown: String,
}

impl ShippingQuote {
    /// Prices `offering` with the tier matched for `metric_value`.
    #[must_use]
    pub fn from_tier(offering: &ServiceOffering, tier: &Tier, metric_value: Decimal) -> Self {
        let service = offering.service();
        let method = service.calculation_method();
        let breakdown = format!(
            "{} {} in range {} = {}",
            format_fixed(metric_value),
            method.unit(),
            tier.range(),
            tier.price()
        );

        Self {
            carrier_id: offering.carrier().id(),
            carrier_name: offering.carrier().name().to_string(),
            service_id: service.id(),
            delivery_type: service.delivery_type(),
            calculation_method: method,
            price: tier.price(),
            metric_value,
            tier_id: tier.id(),
            tier_region: tier.region().clone(),
            tier_range: *tier.range(),
            breakdown,
        }
    }

    /// Returns the carrier ID.
    #[inline]
    #[must_use]
    pub fn carrier_id(&self) -> CarrierId {
        self.carrier_id
    }

    /// Returns the carrier name.
    #[inline]
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// Returns the service ID.
    #[inline]
    #[must_use]
    pub fn service_id(&self) -> ServiceId {
        self.service_id
    }

    /// Returns the delivery type of the quoted service.
    #[inline]
    #[must_use]
    pub fn delivery_type(&self) -> DeliveryType {
        self.delivery_type
    }

    /// Returns the calculation method of the quoted service.
    #[inline]
    #[must_use]
    pub fn calculation_method(&self) -> CalculationMethod {
        self.calculation_method
    }

    /// Returns the total price.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the metric value the tier was matched on.
    #[inline]
    #[must_use]
    pub fn metric_value(&self) -> Decimal {
        self.metric_value
    }

    /// Returns the matched tier's ID.
    #[inline]
    #[must_use]
    pub fn tier_id(&self) -> TierId {
        self.tier_id
    }

    /// Returns the matched tier's region.
    #[inline]
    #[must_use]
    pub fn tier_region(&self) -> &Region {
        &self.tier_region
    }

    /// Returns true if the quote fell back to the national rate table.
    #[inline]
    #[must_use]
    pub fn is_national_fallback(&self) -> bool {
        self.tier_region.is_national()
    }

    /// Returns the matched tier's range.
    #[inline]
    #[must_use]
    pub fn tier_range(&self) -> &TierRange {
        &self.tier_range
    }

    /// Returns the human-readable price breakdown.
    #[inline]
    #[must_use]
    pub fn breakdown(&self) -> &str {
        &self.breakdown
    }
}

impl fmt::Display for ShippingQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShippingQuote(carrier='{}' service={} delivery={} price={})",
            self.carrier_name, self.service_id, self.delivery_type, self.price
        )
    }
}

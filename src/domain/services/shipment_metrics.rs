//! # Shipment Metrics
//!
//! Aggregates an order's lines into the quantities carriers price by.
//!
//! - `weight_total = Σ quantity × unit weight`
//! - `volume_total = Σ quantity × unit volume`
//! - `pallet_total = volume_total / PALLET_VOLUME_M3`
//!
//! Nothing is rounded here; rounding only happens when values are rendered.
//!
//! # Examples
//!
//! ```
//! use carrier_select::domain::entities::{Product, ResolvedLine};
//! use carrier_select::domain::services::shipment_metrics::ShipmentMetrics;
//! use carrier_select::domain::value_objects::ProductId;
//! use rust_decimal::Decimal;
//!
//! let chair = Product::new(ProductId::new(1), "CHAIR", "Chair", Decimal::new(75, 1), Decimal::new(2, 1)).unwrap();
//! let metrics = ShipmentMetrics::calculate(&[ResolvedLine::new(chair, 4).unwrap()]).unwrap();
//!
//! assert_eq!(metrics.weight_total(), Decimal::new(30, 0));
//! assert_eq!(metrics.pallet_total(), Decimal::new(4, 1));
//! ```

use crate::domain::entities::ResolvedLine;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{CalculationMethod, CheckedArithmetic};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cubic metres that make up one pallet.
pub const PALLET_VOLUME_M3: Decimal = Decimal::TWO;

/// Totals of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ShipmentMetrics {
    weight_total: Decimal,
    volume_total: Decimal,
    pallet_total: Decimal,
}

impl ShipmentMetrics {
    /// Computes the totals of `lines`.
    ///
    /// An empty slice yields all-zero metrics.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if a total overflows.
    pub fn calculate(lines: &[ResolvedLine]) -> DomainResult<Self> {
        let mut weight_total = Decimal::ZERO;
        let mut volume_total = Decimal::ZERO;

        for line in lines {
            let quantity = Decimal::from(line.quantity());
            weight_total = weight_total.safe_add(line.product().weight_kg().safe_mul(quantity)?)?;
            volume_total = volume_total.safe_add(line.product().volume_m3().safe_mul(quantity)?)?;
        }

        Self::from_totals(weight_total, volume_total)
    }

    /// Builds metrics from already-summed weight and volume.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the pallet division fails.
    pub fn from_totals(weight_total: Decimal, volume_total: Decimal) -> DomainResult<Self> {
        let pallet_total = volume_total.safe_div(PALLET_VOLUME_M3)?;
        Ok(Self {
            weight_total,
            volume_total,
            pallet_total,
        })
    }

    /// Total weight in kilograms.
    #[inline]
    #[must_use]
    pub fn weight_total(&self) -> Decimal {
        self.weight_total
    }

    /// Total volume in cubic metres.
    #[inline]
    #[must_use]
    pub fn volume_total(&self) -> Decimal {
        self.volume_total
    }

    /// Estimated pallet count.
    #[inline]
    #[must_use]
    pub fn pallet_total(&self) -> Decimal {
        self.pallet_total
    }

    /// Returns the metric a service with `method` is priced by.
    #[inline]
    #[must_use]
    pub fn value_for(&self, method: CalculationMethod) -> Decimal {
        match method {
            CalculationMethod::Weight => self.weight_total,
            CalculationMethod::Volume => self.volume_total,
            CalculationMethod::Pallet => self.pallet_total,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Product;
    use crate::domain::value_objects::ProductId;
    use proptest::prelude::*;

    fn line(weight: Decimal, volume: Decimal, quantity: u32) -> ResolvedLine {
        let product = Product::new(ProductId::new(1), "P", "Product", weight, volume).unwrap();
        ResolvedLine::new(product, quantity).unwrap()
    }

    #[test]
    fn empty_order_is_all_zero() {
        let metrics = ShipmentMetrics::calculate(&[]).unwrap();
        assert_eq!(metrics.weight_total(), Decimal::ZERO);
        assert_eq!(metrics.volume_total(), Decimal::ZERO);
        assert_eq!(metrics.pallet_total(), Decimal::ZERO);
    }

    #[test]
    fn sums_quantity_times_unit_measures() {
        let lines = [
            line(Decimal::new(28, 0), Decimal::new(12, 1), 1),
            line(Decimal::new(75, 1), Decimal::new(5, 2), 4),
        ];
        let metrics = ShipmentMetrics::calculate(&lines).unwrap();

        assert_eq!(metrics.weight_total(), Decimal::new(58, 0));
        assert_eq!(metrics.volume_total(), Decimal::new(14, 1));
        assert_eq!(metrics.pallet_total(), Decimal::new(7, 1));
    }

    #[test]
    fn decimal_sums_do_not_drift() {
        let lines: Vec<_> = (0..10)
            .map(|_| line(Decimal::new(1, 1), Decimal::new(1, 1), 1))
            .collect();
        let metrics = ShipmentMetrics::calculate(&lines).unwrap();
        assert_eq!(metrics.weight_total(), Decimal::ONE);
    }

    #[test]
    fn value_for_picks_matching_metric() {
        let metrics = ShipmentMetrics::from_totals(Decimal::new(58, 0), Decimal::new(3, 0)).unwrap();
        assert_eq!(metrics.value_for(CalculationMethod::Weight), Decimal::new(58, 0));
        assert_eq!(metrics.value_for(CalculationMethod::Volume), Decimal::new(3, 0));
        assert_eq!(metrics.value_for(CalculationMethod::Pallet), Decimal::new(15, 1));
    }

    #[test]
    fn overflow_is_an_error() {
        let lines = [line(Decimal::MAX, Decimal::ZERO, 2)];
        assert!(ShipmentMetrics::calculate(&lines).is_err());
    }

    proptest! {
        #[test]
        fn pallets_are_half_the_volume(volume_cents in 0i64..10_000_000, weight in 0i64..1_000_000) {
            let volume = Decimal::new(volume_cents, 4);
            let metrics = ShipmentMetrics::from_totals(Decimal::new(weight, 2), volume).unwrap();
            prop_assert_eq!(metrics.pallet_total() * Decimal::TWO, volume);
        }

        #[test]
        fn scaling_quantity_scales_pallets(volume_units in 0i64..100_000, k in 1u32..50) {
            let unit_volume = Decimal::new(volume_units, 4);
            let single = ShipmentMetrics::calculate(&[line(Decimal::ONE, unit_volume, 1)]).unwrap();
            let scaled = ShipmentMetrics::calculate(&[line(Decimal::ONE, unit_volume, k)]).unwrap();
            prop_assert_eq!(scaled.pallet_total(), single.pallet_total() * Decimal::from(k));
        }
    }
}

//! # Domain Services
//!
//! Calculations that don't belong to a single entity or value object.
//!
//! ## Services
//!
//! - [`shipment_metrics::ShipmentMetrics`]: order totals carriers price by
//! - [`tier_resolution::TierResolver`]: region precedence and range matching

pub mod shipment_metrics;
pub mod tier_resolution;

pub use shipment_metrics::{PALLET_VOLUME_M3, ShipmentMetrics};
pub use tier_resolution::{Specificity, TierResolver, has_ambiguous_match, select_tier};

//! # Domain Enums
//!
//! Enumeration types for the shipping domain.
//!
//! - [`DeliveryType`] - How the goods are handed over at destination
//! - [`CalculationMethod`] - Which shipment metric prices a service
//!
//! Both enums have a canonical snake_case string form used in storage and
//! serialization. Parsing any other string fails with [`ParseEnumError`], so
//! an unknown calculation method is rejected when a service is loaded and
//! can never reach tier resolution.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Delivery type requested by an order and offered by a carrier service.
///
/// # Examples
///
/// ```
/// use carrier_select::domain::value_objects::enums::DeliveryType;
///
/// let kind: DeliveryType = "home_delivery".parse().unwrap();
/// assert_eq!(kind, DeliveryType::HomeDelivery);
/// assert_eq!(kind.to_string(), "home_delivery");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DeliveryType {
    /// Drop-off at street level.
    Curbside = 0,
    /// Carried up to the customer's home.
    HomeDelivery = 1,
    /// Carried up to the customer's home and installed.
    HomeDeliveryWithInstallation = 2,
}

impl DeliveryType {
    /// All delivery types, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::Curbside,
        Self::HomeDelivery,
        Self::HomeDeliveryWithInstallation,
    ];

    /// Returns the canonical string form.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curbside => "curbside",
            Self::HomeDelivery => "home_delivery",
            Self::HomeDeliveryWithInstallation => "home_delivery_with_installation",
        }
    }
}

impl fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::UnrecognizedDeliveryType(s.to_string()))
    }
}

/// The shipment metric a carrier service prices by.
///
/// # Examples
///
/// ```
/// use carrier_select::domain::value_objects::enums::CalculationMethod;
///
/// assert_eq!(CalculationMethod::Volume.unit(), "m³");
/// assert!("by_distance".parse::<CalculationMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CalculationMethod {
    /// Priced by total weight in kilograms.
    Weight = 0,
    /// Priced by total volume in cubic metres.
    Volume = 1,
    /// Priced by derived pallet count.
    Pallet = 2,
}

impl CalculationMethod {
    /// All calculation methods, in declaration order.
    pub const ALL: [Self; 3] = [Self::Weight, Self::Volume, Self::Pallet];

    /// Returns the canonical string form.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Volume => "volume",
            Self::Pallet => "pallet",
        }
    }

    /// Returns the unit label used in quote breakdowns.
    #[inline]
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Volume => "m³",
            Self::Pallet => "pallets",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::UnrecognizedCalculationMethod(s.to_string()))
    }
}

/// Error returned when a stored tag does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The calculation method tag is not one the resolver implements.
    #[error("unrecognized calculation method: '{0}'")]
    UnrecognizedCalculationMethod(String),

    /// The delivery type tag is unknown.
    #[error("unrecognized delivery type: '{0}'")]
    UnrecognizedDeliveryType(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod delivery_type {
        use super::*;

        #[test]
        fn parses_canonical_and_mixed_case() {
            assert_eq!("curbside".parse::<DeliveryType>().unwrap(), DeliveryType::Curbside);
            assert_eq!(
                " HOME_DELIVERY_WITH_INSTALLATION ".parse::<DeliveryType>().unwrap(),
                DeliveryType::HomeDeliveryWithInstallation
            );
        }

        #[test]
        fn rejects_unknown_tag() {
            let err = "drone".parse::<DeliveryType>().unwrap_err();
            assert_eq!(err, ParseEnumError::UnrecognizedDeliveryType("drone".to_string()));
        }

        #[test]
        fn display_matches_serde() {
            for kind in DeliveryType::ALL {
                let json = serde_json::to_string(&kind).unwrap();
                assert_eq!(json, format!("\"{kind}\""));
            }
        }
    }

    mod calculation_method {
        use super::*;

        #[test]
        fn units() {
            assert_eq!(CalculationMethod::Weight.unit(), "kg");
            assert_eq!(CalculationMethod::Volume.unit(), "m³");
            assert_eq!(CalculationMethod::Pallet.unit(), "pallets");
        }

        #[test]
        fn round_trips_through_str() {
            for method in CalculationMethod::ALL {
                assert_eq!(method.as_str().parse::<CalculationMethod>().unwrap(), method);
            }
        }

        #[test]
        fn rejects_unknown_tag() {
            let err = "by_distance".parse::<CalculationMethod>().unwrap_err();
            assert!(err.to_string().contains("by_distance"));
            assert!(matches!(err, ParseEnumError::UnrecognizedCalculationMethod(_)));
        }
    }
}

//! # Carrier Entities
//!
//! Shipping companies and the services they offer.
//!
//! A [`Carrier`] owns its [`CarrierService`]s; each service is a
//! (delivery type, calculation method) offering with its own tier table.
//! [`ServiceOffering`] is the join of an active service with its carrier, as
//! the ranking engine consumes it.

use crate::domain::value_objects::{CalculationMethod, CarrierId, DeliveryType, ServiceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shipping company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carrier {
    id: CarrierId,
    name: String,
    active: bool,
}

impl Carrier {
    /// Creates an active carrier.
    #[must_use]
    pub fn new(id: CarrierId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns the carrier ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> CarrierId {
        self.id
    }

    /// Returns the carrier name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the carrier accepts shipments.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Carrier({} '{}')", self.id, self.name)
    }
}

/// A service offered by a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierService {
    id: ServiceId,
    carrier_id: CarrierId,
    delivery_type: DeliveryType,
    calculation_method: CalculationMethod,
    active: bool,
}

impl CarrierService {
    /// Creates an active service.
    #[must_use]
    pub fn new(
        id: ServiceId,
        carrier_id: CarrierId,
        delivery_type: DeliveryType,
        calculation_method: CalculationMethod,
    ) -> Self {
        Self {
            id,
            carrier_id,
            delivery_type,
            calculation_method,
            active: true,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns the service ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> ServiceId {
        self.id
    }

    /// Returns the owning carrier's ID.
    #[inline]
    #[must_use]
    pub fn carrier_id(&self) -> CarrierId {
        self.carrier_id
    }

    /// Returns the delivery type.
    #[inline]
    #[must_use]
    pub fn delivery_type(&self) -> DeliveryType {
        self.delivery_type
    }

    /// Returns the calculation method.
    #[inline]
    #[must_use]
    pub fn calculation_method(&self) -> CalculationMethod {
        self.calculation_method
    }

    /// Returns true if the service accepts shipments.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// An active service together with its active carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    carrier: Carrier,
    service: CarrierService,
}

impl ServiceOffering {
    /// Joins a service with its carrier.
    ///
    /// Returns `None` if the service does not belong to the carrier.
    #[must_use]
    pub fn new(carrier: Carrier, service: CarrierService) -> Option<Self> {
        (service.carrier_id() == carrier.id()).then_some(Self { carrier, service })
    }

    /// Returns the carrier.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    /// Returns the service.
    #[inline]
    #[must_use]
    pub fn service(&self) -> &CarrierService {
        &self.service
    }

    /// Returns true if both the carrier and the service are active.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.carrier.is_active() && self.service.is_active()
    }
}

//! # Identifiers
//!
//! Integer identity newtypes for every stored entity.
//!
//! Each entity gets its own type so a [`ServiceId`] can never be passed
//! where a [`TierId`] is expected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            JsonSchema,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            #[inline]
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[inline]
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Identifier of a [`Carrier`](crate::domain::entities::Carrier).
    CarrierId
);
integer_id!(
    /// Identifier of a [`CarrierService`](crate::domain::entities::CarrierService).
    ServiceId
);
integer_id!(
    /// Identifier of a [`Tier`](crate::domain::entities::Tier).
    TierId
);
integer_id!(
    /// Identifier of a [`Product`](crate::domain::entities::Product).
    ProductId
);
integer_id!(
    /// Identifier of an [`Order`](crate::domain::entities::Order).
    OrderId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_and_get() {
        let id = OrderId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&TierId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: TierId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TierId::new(7));
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(CarrierId::new(1) < CarrierId::new(2));
    }
}

//! # Region
//!
//! Destination region labels and the national fallback sentinel.

use crate::domain::errors::{DomainError, DomainResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the region whose tiers apply to any destination without its own.
pub const NATIONAL: &str = "NATIONAL";

/// A destination region (province) or the [`NATIONAL`] sentinel.
///
/// Labels are compared exactly, after trimming surrounding whitespace.
///
/// # Examples
///
/// ```
/// use carrier_select::domain::value_objects::Region;
///
/// let madrid = Region::new("Madrid").unwrap();
/// assert!(!madrid.is_national());
/// assert!(Region::national().is_national());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);

impl Region {
    /// Creates a region label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRegion` if the label is empty.
    pub fn new(label: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_region("region label must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the national fallback region.
    #[must_use]
    pub fn national() -> Self {
        Self(NATIONAL.to_string())
    }

    /// Returns true if this is the national fallback region.
    #[inline]
    #[must_use]
    pub fn is_national(&self) -> bool {
        self.0 == NATIONAL
    }

    /// Returns the label.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Regions whose tiers may serve a destination: itself, then the fallback.
    #[must_use]
    pub fn lookup_set(&self) -> Vec<Region> {
        if self.is_national() {
            vec![self.clone()]
        } else {
            vec![self.clone(), Self::national()]
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Region {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn trims_label() {
        assert_eq!(Region::new("  Toledo ").unwrap().as_str(), "Toledo");
    }

    #[test]
    fn rejects_blank_label() {
        assert!(Region::new("   ").is_err());
    }

    #[test]
    fn national_sentinel() {
        assert!(Region::new("NATIONAL").unwrap().is_national());
        assert!(!Region::new("Madrid").unwrap().is_national());
    }

    #[test]
    fn lookup_set_appends_fallback() {
        let set = Region::new("Madrid").unwrap().lookup_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].as_str(), "Madrid");
        assert!(set[1].is_national());

        assert_eq!(Region::national().lookup_set().len(), 1);
    }

    #[test]
    fn deserialization_validates() {
        assert!(serde_json::from_str::<Region>("\"\"").is_err());
        let region: Region = serde_json::from_str("\"Sevilla\"").unwrap();
        assert_eq!(region.to_string(), "Sevilla");
    }
}

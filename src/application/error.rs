//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── OrderNotFound(OrderId)      - The requested order does not exist
//! ├── Domain(DomainError)         - Invalid values or failed arithmetic
//! ├── Repository(RepositoryError) - Data store failures
//! └── Configuration(String)       - Invalid settings
//! ```
//!
//! "No applicable tier" and "no carriers available" are not errors: they
//! surface as `None` and as an empty ranking.
//!
//! # Examples
//!
//! ```
//! use carrier_select::application::error::ApplicationError;
//! use carrier_select::domain::value_objects::OrderId;
//!
//! let err = ApplicationError::order_not_found(OrderId::new(42));
//! assert!(err.is_not_found());
//! assert!(err.to_string().contains("42"));
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::OrderId;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The order does not exist.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Repository error from the data store.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Creates an order not found error.
    #[must_use]
    pub fn order_not_found(id: OrderId) -> Self {
        Self::OrderNotFound(id)
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if a requested entity does not exist.
    ///
    /// Covers both a missing order and a missing entity reported by the
    /// data store, such as a product referenced by an order line.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::OrderNotFound(_) => true,
            Self::Repository(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if this error points at bad stored data or a bug rather
    /// than at the request.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_defect(),
            Self::Repository(e) => e.is_data_defect(),
            _ => false,
        }
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! # Domain Entities
//!
//! ## Aggregates
//!
//! - [`Carrier`]: shipping company owning its [`CarrierService`]s
//! - [`Tier`]: priced metric range of a service for a region
//! - [`Order`]: customer order owning its [`OrderLine`]s
//!
//! ## Read Models
//!
//! - [`ServiceOffering`]: active service joined with its carrier
//! - [`ResolvedOrder`]: order with products attached to its lines
//! - [`ShippingQuote`]: priced offer from one service for one order

pub mod carrier;
pub mod order;
pub mod quote;
pub mod tier;

pub use carrier::{Carrier, CarrierService, ServiceOffering};
pub use order::{Order, OrderLine, Product, ResolvedLine, ResolvedOrder};
pub use quote::ShippingQuote;
pub use tier::{Tier, TierRecord};

//! # carrier-select
//!
//! Rate resolution engine that picks the cheapest carrier service for an
//! order.
//!
//! Carriers offer services per delivery type. Each service prices shipments
//! by weight, volume or pallet count through tiered rate tables scoped to a
//! destination region, with `NATIONAL` tiers as the fallback. For an order
//! the engine computes the shipment totals, resolves the applicable tier of
//! every active service, and ranks the resulting quotes by price.
//!
//! ## Layers
//!
//! - [`domain`]: entities, value objects and pure calculations
//! - [`application`]: quote building and carrier ranking
//! - [`infrastructure`]: repository ports with in-memory and PostgreSQL
//!   adapters
//! - [`config`] and [`telemetry`]: settings and logging
//!
//! # Examples
//!
//! ```
//! use carrier_select::application::services::CarrierRankingEngine;
//! use carrier_select::domain::entities::*;
//! use carrier_select::domain::value_objects::*;
//! use carrier_select::infrastructure::persistence::in_memory::*;
//! use carrier_select::infrastructure::persistence::TierRepository;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let carriers = Arc::new(InMemoryCarrierRepository::new());
//! let tiers = Arc::new(InMemoryTierRepository::new());
//! let orders = Arc::new(InMemoryOrderRepository::new());
//!
//! carriers.save_carrier(Carrier::new(CarrierId::new(1), "SEUR")).await;
//! carriers
//!     .save_service(CarrierService::new(
//!         ServiceId::new(1),
//!         CarrierId::new(1),
//!         DeliveryType::Curbside,
//!         CalculationMethod::Weight,
//!     ))
//!     .await
//!     .unwrap();
//! tiers
//!     .upsert(TierRecord::new(
//!         ServiceId::new(1),
//!         Region::new("Madrid").unwrap(),
//!         TierRange::new(Decimal::new(50, 0), Some(Decimal::new(100, 0))).unwrap(),
//!         Price::new(Decimal::new(28, 0)).unwrap(),
//!     ))
//!     .await
//!     .unwrap();
//!
//! orders
//!     .save_product(Product::new(ProductId::new(1), "SOFA", "Sofa", Decimal::new(58, 0), Decimal::ONE).unwrap())
//!     .await;
//! orders
//!     .save_order(
//!         Order::new(OrderId::new(1), "PED-001", Region::new("Madrid").unwrap(), DeliveryType::Curbside)
//!             .with_line(OrderLine::new(ProductId::new(1), 1).unwrap()),
//!     )
//!     .await
//!     .unwrap();
//!
//! let engine = CarrierRankingEngine::with_defaults(carriers, tiers, orders);
//! let best = engine.best_quote(OrderId::new(1)).await.unwrap().unwrap();
//! assert_eq!(best.breakdown(), "58.00 kg in range [50.00 - 100.00] = 28.00 €");
//! # });
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

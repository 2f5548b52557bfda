//! Shared fixture for integration tests: an in-memory catalog of carriers,
//! tiers and orders.

#![allow(dead_code, clippy::unwrap_used)]

use carrier_select::application::services::CarrierRankingEngine;
use carrier_select::domain::entities::{
    Carrier, CarrierService, Order, OrderLine, Product, TierRecord,
};
use carrier_select::domain::value_objects::{
    CalculationMethod, CarrierId, DeliveryType, OrderId, Price, ProductId, Region, ServiceId,
    TierRange,
};
use carrier_select::infrastructure::persistence::TierRepository;
use carrier_select::infrastructure::persistence::in_memory::{
    InMemoryCarrierRepository, InMemoryOrderRepository, InMemoryTierRepository,
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Parses a decimal literal such as `"7.5"`.
pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn region(label: &str) -> Region {
    Region::new(label).unwrap()
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub carriers: Arc<InMemoryCarrierRepository>,
    pub tiers: Arc<InMemoryTierRepository>,
    pub orders: Arc<InMemoryOrderRepository>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> CarrierRankingEngine {
        CarrierRankingEngine::with_defaults(
            self.carriers.clone(),
            self.tiers.clone(),
            self.orders.clone(),
        )
    }

    pub async fn carrier(&self, id: i64, name: &str, active: bool) {
        self.carriers
            .save_carrier(Carrier::new(CarrierId::new(id), name).with_active(active))
            .await;
    }

    pub async fn service(
        &self,
        id: i64,
        carrier_id: i64,
        delivery: DeliveryType,
        method: CalculationMethod,
        active: bool,
    ) {
        self.carriers
            .save_service(
                CarrierService::new(ServiceId::new(id), CarrierId::new(carrier_id), delivery, method)
                    .with_active(active),
            )
            .await
            .unwrap();
    }

    /// Adds a tier; `max` of `None` is open-ended.
    pub async fn tier(&self, service_id: i64, region_label: &str, min: &str, max: Option<&str>, price: &str) {
        self.tiers
            .upsert(TierRecord::new(
                ServiceId::new(service_id),
                region(region_label),
                TierRange::new(dec(min), max.map(dec)).unwrap(),
                Price::new(dec(price)).unwrap(),
            ))
            .await
            .unwrap();
    }

    pub async fn product(&self, id: i64, weight_kg: &str, volume_m3: &str) {
        self.orders
            .save_product(
                Product::new(
                    ProductId::new(id),
                    format!("P-{id:03}"),
                    format!("Product {id}"),
                    dec(weight_kg),
                    dec(volume_m3),
                )
                .unwrap(),
            )
            .await;
    }

    /// Adds an order with `(product_id, quantity)` lines.
    pub async fn order(&self, id: i64, region_label: &str, delivery: DeliveryType, lines: &[(i64, u32)]) {
        let order = lines.iter().fold(
            Order::new(OrderId::new(id), format!("PED-{id:03}"), region(region_label), delivery),
            |order, (product, quantity)| {
                order.with_line(OrderLine::new(ProductId::new(*product), *quantity).unwrap())
            },
        );
        self.orders.save_order(order).await.unwrap();
    }

    /// The 58 kg order: 28 kg × 1 plus 7.5 kg × 4.
    pub async fn fifty_eight_kg_order(&self, id: i64, region_label: &str) {
        self.product(1, "28", "0.5").await;
        self.product(2, "7.5", "0.125").await;
        self.order(id, region_label, DeliveryType::Curbside, &[(1, 1), (2, 4)]).await;
    }
}

//! End-to-end ranking scenarios against the in-memory repositories.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod common;

use carrier_select::application::ApplicationError;
use carrier_select::domain::value_objects::{CalculationMethod, DeliveryType, OrderId};
use common::{Catalog, dec};

async fn weight_carrier(catalog: &Catalog, id: i64) {
    catalog.carrier(id, &format!("Carrier {id}"), true).await;
    catalog
        .service(id, id, DeliveryType::Curbside, CalculationMethod::Weight, true)
        .await;
}

#[tokio::test]
async fn madrid_order_uses_madrid_tier() {
    let catalog = Catalog::new();
    catalog.fifty_eight_kg_order(1, "Madrid").await;
    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "Madrid", "0", Some("50"), "20.00").await;
    catalog.tier(1, "Madrid", "50", Some("100"), "28.00").await;
    catalog.tier(1, "NATIONAL", "40", Some("80"), "35.00").await;

    let best = catalog.engine().best_quote(OrderId::new(1)).await.unwrap().unwrap();

    assert_eq!(best.metric_value(), dec("58"));
    assert_eq!(best.price().get(), dec("28.00"));
    assert_eq!(best.tier_region().as_str(), "Madrid");
    assert_eq!(best.breakdown(), "58.00 kg in range [50.00 - 100.00] = 28.00 €");
}

#[tokio::test]
async fn region_without_tiers_falls_back_to_national() {
    let catalog = Catalog::new();
    catalog.fifty_eight_kg_order(1, "Toledo").await;
    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "Madrid", "50", Some("100"), "28.00").await;
    catalog.tier(1, "NATIONAL", "40", Some("80"), "35.00").await;

    let best = catalog.engine().best_quote(OrderId::new(1)).await.unwrap().unwrap();

    assert_eq!(best.price().get(), dec("35.00"));
    assert!(best.is_national_fallback());
}

#[tokio::test]
async fn service_without_covering_tier_is_skipped() {
    let catalog = Catalog::new();
    catalog.product(1, "100", "1").await;
    catalog
        .order(1, "Madrid", DeliveryType::Curbside, &[(1, 5)])
        .await;

    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "NATIONAL", "0", Some("100"), "20.00").await;
    catalog.tier(1, "NATIONAL", "100", Some("200"), "40.00").await;

    weight_carrier(&catalog, 2).await;
    catalog.tier(2, "NATIONAL", "0", Some("250"), "30.00").await;
    catalog.tier(2, "NATIONAL", "250", None, "90.00").await;

    let ranked = catalog.engine().rank(OrderId::new(1), 10).await.unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].quote.carrier_id().get(), 2);
    assert_eq!(ranked[0].quote.price().get(), dec("90.00"));
    assert!(ranked[0].quote.tier_range().is_open_ended());
}

#[tokio::test]
async fn two_services_rank_cheapest_first_with_savings() {
    let catalog = Catalog::new();
    catalog.fifty_eight_kg_order(1, "Madrid").await;
    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "Madrid", "50", Some("100"), "45.00").await;
    weight_carrier(&catalog, 2).await;
    catalog.tier(2, "Madrid", "50", Some("100"), "28.00").await;

    let engine = catalog.engine();
    let ranked = engine.rank(OrderId::new(1), 5).await.unwrap();
    let prices: Vec<_> = ranked.iter().map(|r| r.quote.price().get()).collect();
    assert_eq!(prices, vec![dec("28.00"), dec("45.00")]);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[1].rank, 2);

    let savings = engine.compare(OrderId::new(1)).await.unwrap().savings.unwrap();
    assert_eq!(savings.amount, dec("17.00"));
    assert_eq!(savings.percentage, dec("37.78"));
}

#[tokio::test]
async fn unknown_order_is_reported_not_ranked_empty() {
    let catalog = Catalog::new();
    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "NATIONAL", "0", None, "10.00").await;
    let engine = catalog.engine();

    let err = engine.rank(OrderId::new(404), 5).await.unwrap_err();
    assert!(matches!(err, ApplicationError::OrderNotFound(_)));
    assert!(engine.best_quote(OrderId::new(404)).await.unwrap_err().is_not_found());
    assert!(engine.compare(OrderId::new(404)).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn inactive_carriers_and_services_never_quote() {
    let catalog = Catalog::new();
    catalog.fifty_eight_kg_order(1, "Madrid").await;

    catalog.carrier(1, "Active", true).await;
    catalog
        .service(1, 1, DeliveryType::Curbside, CalculationMethod::Weight, true)
        .await;
    catalog
        .service(2, 1, DeliveryType::Curbside, CalculationMethod::Weight, false)
        .await;
    catalog.carrier(3, "Retired", false).await;
    catalog
        .service(3, 3, DeliveryType::Curbside, CalculationMethod::Weight, true)
        .await;
    for service in 1..=3 {
        catalog.tier(service, "NATIONAL", "0", None, "10.00").await;
    }

    let ranked = catalog.engine().rank(OrderId::new(1), 10).await.unwrap();
    let services: Vec<_> = ranked.iter().map(|r| r.quote.service_id().get()).collect();
    assert_eq!(services, vec![1]);
}

#[tokio::test]
async fn other_delivery_types_are_ignored() {
    let catalog = Catalog::new();
    catalog.fifty_eight_kg_order(1, "Madrid").await;
    catalog.carrier(1, "Installer", true).await;
    catalog
        .service(
            1,
            1,
            DeliveryType::HomeDeliveryWithInstallation,
            CalculationMethod::Weight,
            true,
        )
        .await;
    catalog.tier(1, "NATIONAL", "0", None, "99.00").await;

    let comparison = catalog.engine().compare(OrderId::new(1)).await.unwrap();
    assert!(comparison.is_empty());
    assert!(comparison.best.is_none());
}

#[tokio::test]
async fn calculation_methods_pick_their_metric() {
    let catalog = Catalog::new();
    // 58 kg, 0.5 + 4 × 0.125 = 1.0 m³, 0.5 pallets
    catalog.fifty_eight_kg_order(1, "Madrid").await;

    catalog.carrier(1, "ByVolume", true).await;
    catalog
        .service(1, 1, DeliveryType::Curbside, CalculationMethod::Volume, true)
        .await;
    catalog.tier(1, "NATIONAL", "0", Some("2"), "31.00").await;

    catalog.carrier(2, "ByPallet", true).await;
    catalog
        .service(2, 2, DeliveryType::Curbside, CalculationMethod::Pallet, true)
        .await;
    catalog.tier(2, "NATIONAL", "0", Some("1"), "33.00").await;

    let ranked = catalog.engine().rank(OrderId::new(1), 10).await.unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].quote.metric_value(), dec("1.0"));
    assert_eq!(ranked[0].quote.breakdown(), "1.00 m³ in range [0.00 - 2.00] = 31.00 €");
    assert_eq!(ranked[1].quote.metric_value(), dec("0.5"));
    assert_eq!(ranked[1].quote.breakdown(), "0.50 pallets in range [0.00 - 1.00] = 33.00 €");
}

#[tokio::test]
async fn shared_boundary_resolves_to_upper_tier() {
    let catalog = Catalog::new();
    catalog.product(1, "100", "0").await;
    catalog
        .order(1, "Madrid", DeliveryType::Curbside, &[(1, 1)])
        .await;
    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "Madrid", "50", Some("100"), "28.00").await;
    catalog.tier(1, "Madrid", "100", Some("200"), "45.00").await;

    let best = catalog.engine().best_quote(OrderId::new(1)).await.unwrap().unwrap();
    assert_eq!(best.price().get(), dec("45.00"));
}

#[tokio::test]
async fn ranking_is_sorted_and_prefix_stable() {
    let catalog = Catalog::new();
    catalog.fifty_eight_kg_order(1, "Madrid").await;
    let prices = ["40.00", "25.00", "33.00", "25.00", "60.00", "29.99"];
    for (i, price) in prices.iter().enumerate() {
        let id = i as i64 + 1;
        weight_carrier(&catalog, id).await;
        catalog.tier(id, "NATIONAL", "0", None, price).await;
    }
    let engine = catalog.engine();

    let all = engine.rank(OrderId::new(1), 100).await.unwrap();
    assert_eq!(all.len(), prices.len());
    assert!(all.windows(2).all(|w| w[0].quote.price() <= w[1].quote.price()));

    // equal prices keep carrier order
    assert_eq!(all[0].quote.carrier_id().get(), 2);
    assert_eq!(all[1].quote.carrier_id().get(), 4);

    let top = engine.rank(OrderId::new(1), 1).await.unwrap();
    assert_eq!(top[0].quote, all[0].quote);

    let top3 = engine.rank(OrderId::new(1), 3).await.unwrap();
    assert_eq!(top3.as_slice(), &all[..3]);
}

#[tokio::test]
async fn empty_order_prices_at_zero_metrics() {
    let catalog = Catalog::new();
    catalog.order(1, "Madrid", DeliveryType::Curbside, &[]).await;
    weight_carrier(&catalog, 1).await;
    catalog.tier(1, "NATIONAL", "0", Some("10"), "5.00").await;

    let comparison = catalog.engine().compare(OrderId::new(1)).await.unwrap();
    assert!(comparison.order.lines.is_empty());
    assert_eq!(comparison.order.metrics.weight_total(), dec("0"));
    assert_eq!(comparison.best.unwrap().price().get(), dec("5.00"));
}

//! # Carrier Ranking Engine
//!
//! Ranks every carrier service able to ship an order by total price.
//!
//! For one order the engine:
//!
//! 1. loads the order with its products and computes [`ShipmentMetrics`];
//! 2. enumerates the active offerings for the order's delivery type;
//! 3. quotes each offering, dropping services without an applicable tier;
//! 4. ranks the quotes with the injected [`RankingStrategy`] and truncates.
//!
//! Invocations are independent: the engine holds no mutable state and can be
//! shared behind an `Arc` by concurrent callers.
//!
//! A missing order is [`ApplicationError::OrderNotFound`]; an order no
//! carrier can serve is an empty ranking.
//!
//! # Examples
//!
//! ```ignore
//! use carrier_select::application::services::CarrierRankingEngine;
//!
//! let engine = CarrierRankingEngine::with_defaults(carriers, tiers, orders);
//! let top3 = engine.rank(OrderId::new(1), 3).await?;
//! let best = engine.best_quote(OrderId::new(1)).await?;
//! let comparison = engine.compare(OrderId::new(1)).await?;
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::quote_builder::QuoteBuilder;
use crate::application::services::ranking_strategy::{
    CheapestFirstStrategy, RankedQuote, RankingStrategy,
};
use crate::domain::entities::{ResolvedOrder, ShippingQuote};
use crate::domain::errors::DomainResult;
use crate::domain::services::ShipmentMetrics;
use crate::domain::value_objects::arithmetic::{percentage_of, round_for_display};
use crate::domain::value_objects::{CheckedArithmetic, DeliveryType, OrderId, Price, Region};
use crate::infrastructure::persistence::{CarrierRepository, OrderRepository, TierRepository};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Limits applied by the ranking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Number of quotes returned when the caller gives no limit.
    pub default_limit: usize,
    /// Number of quotes included in a comparison.
    pub comparison_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: 5,
            comparison_limit: 100,
        }
    }
}

impl RankingConfig {
    /// Sets the default ranking limit.
    #[must_use]
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Sets the comparison limit.
    #[must_use]
    pub fn with_comparison_limit(mut self, limit: usize) -> Self {
        self.comparison_limit = limit;
        self
    }
}

/// One order line as shown in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineSummary {
    /// Product catalog code.
    pub code: String,
    /// Product name.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Weight of one unit in kilograms.
    pub unit_weight_kg: Decimal,
    /// Volume of one unit in cubic metres.
    pub unit_volume_m3: Decimal,
}

/// The order a comparison was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OrderSummary {
    /// Order ID.
    pub order_id: OrderId,
    /// Order number.
    pub number: String,
    /// Destination region.
    pub region: Region,
    /// Requested delivery type.
    pub delivery_type: DeliveryType,
    /// Shipment totals.
    pub metrics: ShipmentMetrics,
    /// Lines in entry order.
    pub lines: Vec<LineSummary>,
}

impl OrderSummary {
    fn new(resolved: &ResolvedOrder, metrics: ShipmentMetrics) -> Self {
        let order = resolved.order();
        Self {
            order_id: order.id(),
            number: order.number().to_string(),
            region: order.region().clone(),
            delivery_type: order.delivery_type(),
            metrics,
            lines: resolved
                .lines()
                .iter()
                .map(|line| LineSummary {
                    code: line.product().code().to_string(),
                    name: line.product().name().to_string(),
                    quantity: line.quantity(),
                    unit_weight_kg: line.product().weight_kg(),
                    unit_volume_m3: line.product().volume_m3(),
                })
                .collect(),
        }
    }
}

/// Price spread between the cheapest and the most expensive quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Savings {
    /// Cheapest price.
    pub best_price: Price,
    /// Most expensive price.
    pub worst_price: Price,
    /// `worst_price - best_price`.
    pub amount: Decimal,
    /// `amount` as a percentage of `worst_price`, rounded to two decimals;
    /// zero when `worst_price` is zero.
    pub percentage: Decimal,
}

impl Savings {
    /// Computes the spread between `best` and `worst`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the subtraction or division fails.
    pub fn between(best: Price, worst: Price) -> DomainResult<Self> {
        let amount = worst.get().safe_sub(best.get())?;
        let percentage = if worst.is_zero() {
            Decimal::ZERO
        } else {
            round_for_display(percentage_of(amount, worst.get())?)
        };
        Ok(Self {
            best_price: best,
            worst_price: worst,
            amount,
            percentage,
        })
    }
}

/// Side-by-side view of every carrier able to ship an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CarrierComparison {
    /// The order and its totals.
    pub order: OrderSummary,
    /// The cheapest quote, if any.
    pub best: Option<ShippingQuote>,
    /// All quotes, cheapest first.
    pub quotes: Vec<RankedQuote>,
    /// Spread between best and worst; present only with two or more quotes.
    pub savings: Option<Savings>,
}

impl CarrierComparison {
    /// Returns true if no carrier can ship the order.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Engine ranking carrier services for orders.
#[derive(Debug)]
pub struct CarrierRankingEngine {
    carriers: Arc<dyn CarrierRepository>,
    orders: Arc<dyn OrderRepository>,
    quote_builder: QuoteBuilder,
    ranking_strategy: Arc<dyn RankingStrategy>,
    config: RankingConfig,
}

impl CarrierRankingEngine {
    /// Creates a new engine.
    #[must_use]
    pub fn new(
        carriers: Arc<dyn CarrierRepository>,
        tiers: Arc<dyn TierRepository>,
        orders: Arc<dyn OrderRepository>,
        ranking_strategy: Arc<dyn RankingStrategy>,
        config: RankingConfig,
    ) -> Self {
        Self {
            carriers,
            orders,
            quote_builder: QuoteBuilder::new(tiers),
            ranking_strategy,
            config,
        }
    }

    /// Creates an engine ranking cheapest first with default limits.
    #[must_use]
    pub fn with_defaults(
        carriers: Arc<dyn CarrierRepository>,
        tiers: Arc<dyn TierRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self::new(
            carriers,
            tiers,
            orders,
            Arc::new(CheapestFirstStrategy::new()),
            RankingConfig::default(),
        )
    }

    /// Returns the engine's limits.
    #[must_use]
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Ranks up to `limit` quotes for an order, best first.
    ///
    /// A `limit` of zero yields an empty ranking once the order is found.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::OrderNotFound` if the order does not exist
    /// - `ApplicationError::Repository` if the data store fails
    /// - `ApplicationError::Domain` if the shipment totals overflow
    pub async fn rank(&self, order_id: OrderId, limit: usize) -> ApplicationResult<Vec<RankedQuote>> {
        let resolved = self.load_order(order_id).await?;
        let metrics = ShipmentMetrics::calculate(resolved.lines())?;
        self.rank_resolved(&resolved, &metrics, limit).await
    }

    /// Ranks with the configured default limit.
    ///
    /// # Errors
    ///
    /// Same as [`rank`](Self::rank).
    pub async fn rank_default(&self, order_id: OrderId) -> ApplicationResult<Vec<RankedQuote>> {
        self.rank(order_id, self.config.default_limit).await
    }

    /// Returns the cheapest quote for an order.
    ///
    /// `Ok(None)` means no carrier can ship the order.
    ///
    /// # Errors
    ///
    /// Same as [`rank`](Self::rank).
    pub async fn best_quote(&self, order_id: OrderId) -> ApplicationResult<Option<ShippingQuote>> {
        let ranked = self.rank(order_id, 1).await?;
        Ok(ranked.into_iter().next().map(|r| r.quote))
    }

    /// Builds the full comparison view for an order.
    ///
    /// # Errors
    ///
    /// Same as [`rank`](Self::rank).
    pub async fn compare(&self, order_id: OrderId) -> ApplicationResult<CarrierComparison> {
        let resolved = self.load_order(order_id).await?;
        let metrics = ShipmentMetrics::calculate(resolved.lines())?;
        let quotes = self
            .rank_resolved(&resolved, &metrics, self.config.comparison_limit)
            .await?;

        let best = quotes.first().map(|r| r.quote.clone());
        let savings = match (quotes.first(), quotes.last()) {
            (Some(first), Some(last)) if quotes.len() > 1 => {
                Some(Savings::between(first.quote.price(), last.quote.price())?)
            }
            _ => None,
        };

        Ok(CarrierComparison {
            order: OrderSummary::new(&resolved, metrics),
            best,
            quotes,
            savings,
        })
    }

    async fn load_order(&self, order_id: OrderId) -> ApplicationResult<ResolvedOrder> {
        self.orders
            .get_resolved(order_id)
            .await?
            .ok_or(ApplicationError::OrderNotFound(order_id))
    }

    async fn rank_resolved(
        &self,
        resolved: &ResolvedOrder,
        metrics: &ShipmentMetrics,
        limit: usize,
    ) -> ApplicationResult<Vec<RankedQuote>> {
        let order = resolved.order();
        let offerings = self
            .carriers
            .find_active_offerings(order.delivery_type())
            .await?;

        let mut quotes = Vec::with_capacity(offerings.len());
        for offering in &offerings {
            if let Some(quote) = self
                .quote_builder
                .build(offering, order.region(), metrics)
                .await?
            {
                quotes.push(quote);
            }
        }
        let quoted = quotes.len();

        let mut ranked = self.ranking_strategy.rank(quotes);
        ranked.truncate(limit);

        tracing::info!(
            order_id = %order.id(),
            region = %order.region(),
            delivery_type = %order.delivery_type(),
            offerings = offerings.len(),
            quoted,
            returned = ranked.len(),
            strategy = self.ranking_strategy.name(),
            "carriers ranked"
        );

        Ok(ranked)
    }
}

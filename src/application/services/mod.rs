//! # Application Services
//!
//! Services that orchestrate domain logic over the repository ports.
//!
//! - [`CarrierRankingEngine`]: ranks carrier services for an order
//! - [`QuoteBuilder`]: prices one offering for one shipment
//! - [`RankingStrategy`]: strategies for ordering quotes

pub mod carrier_ranking;
pub mod quote_builder;
pub mod ranking_strategy;

pub use carrier_ranking::{
    CarrierComparison, CarrierRankingEngine, LineSummary, OrderSummary, RankingConfig, Savings,
};
pub use quote_builder::QuoteBuilder;
pub use ranking_strategy::{CheapestFirstStrategy, RankedQuote, RankingStrategy};

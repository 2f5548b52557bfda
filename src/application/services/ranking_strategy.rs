//! # Ranking Strategy
//!
//! Strategies for ordering shipping quotes.
//!
//! This module provides the [`RankingStrategy`] trait and the
//! [`CheapestFirstStrategy`] the ranking engine uses by default.

use crate::domain::entities::ShippingQuote;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote with its position in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RankedQuote {
    /// The quote being ranked.
    pub quote: ShippingQuote,
    /// The rank (1 = best).
    pub rank: usize,
}

impl RankedQuote {
    /// Creates a new ranked quote.
    #[must_use]
    pub fn new(quote: ShippingQuote, rank: usize) -> Self {
        Self { quote, rank }
    }

    /// Returns true if this quote is the best (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for RankedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankedQuote(#{} quote={})", self.rank, self.quote)
    }
}

/// Trait for ranking strategies.
///
/// Implementations receive quotes in carrier enumeration order and return
/// them ranked best first, with consecutive ranks starting at 1.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the given quotes.
    fn rank(&self, quotes: Vec<ShippingQuote>) -> Vec<RankedQuote>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Ranks quotes by ascending total price.
///
/// The sort is stable: quotes with equal prices keep their enumeration
/// order (carrier ID, then service ID).
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestFirstStrategy;

impl CheapestFirstStrategy {
    /// Creates a new cheapest-first strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for CheapestFirstStrategy {
    fn rank(&self, mut quotes: Vec<ShippingQuote>) -> Vec<RankedQuote> {
        quotes.sort_by_key(ShippingQuote::price);
        quotes
            .into_iter()
            .enumerate()
            .map(|(i, quote)| RankedQuote::new(quote, i + 1))
            .collect()
    }

    fn name(&self) -> &'static str {
        "CheapestFirst"
    }
}

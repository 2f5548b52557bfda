//! # In-Memory Order Repository
//!
//! In-memory implementation of [`OrderRepository`] for tests and benchmarks.
//!
//! Orders and the product catalog are stored separately; lines are joined
//! to their products when an order is read.

use crate::domain::entities::{Order, Product, ResolvedLine, ResolvedOrder};
use crate::domain::value_objects::{OrderId, ProductId};
use crate::infrastructure::persistence::traits::{
    OrderRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`OrderRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a catalog product.
    pub async fn save_product(&self, product: Product) {
        let mut products = self.products.write().await;
        products.insert(product.id(), product);
    }

    /// Inserts an order.
    ///
    /// Lines are not checked against the catalog here; a dangling product
    /// reference surfaces when the order is read.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if an order with the same ID or
    /// number already exists.
    pub async fn save_order(&self, order: Order) -> RepositoryResult<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id()) {
            return Err(RepositoryError::duplicate("Order", order.id()));
        }
        if orders.values().any(|o| o.number() == order.number()) {
            return Err(RepositoryError::duplicate("Order", order.number()));
        }
        orders.insert(order.id(), order);
        Ok(())
    }

    /// Returns the number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if no orders are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_resolved(&self, id: OrderId) -> RepositoryResult<Option<ResolvedOrder>> {
        let orders = self.orders.read().await;
        let Some(order) = orders.get(&id) else {
            return Ok(None);
        };

        let products = self.products.read().await;
        let lines = order
            .lines()
            .iter()
            .map(|line| {
                let product = products
                    .get(&line.product_id())
                    .ok_or_else(|| RepositoryError::not_found("Product", line.product_id()))?;
                ResolvedLine::new(product.clone(), line.quantity())
                    .map_err(|e| RepositoryError::serialization(e.to_string()))
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Some(ResolvedOrder::new(order.clone(), lines)))
    }
}

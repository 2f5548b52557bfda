//! # PostgreSQL Order Repository

use crate::domain::entities::{Order, Product, ResolvedLine, ResolvedOrder};
use crate::domain::value_objects::{DeliveryType, OrderId, ProductId, Region};
use crate::infrastructure::persistence::postgres::{invalid_row, map_sqlx_error};
use crate::infrastructure::persistence::traits::{
    OrderRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL implementation of [`OrderRepository`].
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a repository over `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn get_resolved(&self, id: OrderId) -> RepositoryResult<Option<ResolvedOrder>> {
        let row: Option<OrderRow> = sqlx::query_as(
            "SELECT id, number, region, delivery_type FROM orders WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let lines: Vec<LineRow> = sqlx::query_as(
            r#"
            SELECT l.id AS line_id, l.product_id, l.quantity,
                   p.code, p.name, p.weight_kg, p.volume_m3
            FROM order_lines l
            LEFT JOIN products p ON p.id = l.product_id
            WHERE l.order_id = $1
            ORDER BY l.id ASC
            "#,
        )
        .bind(id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let order = row.try_into_order()?;
        let lines = lines
            .into_iter()
            .map(LineRow::try_into_line)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Some(ResolvedOrder::new(order, lines)))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    number: String,
    region: String,
    delivery_type: String,
}

impl OrderRow {
    fn try_into_order(self) -> RepositoryResult<Order> {
        let id = self.id;
        let region = Region::new(self.region).map_err(|e| invalid_row("orders", id, e))?;
        let delivery_type: DeliveryType = self
            .delivery_type
            .parse()
            .map_err(|e| invalid_row("orders", id, e))?;
        Ok(Order::new(OrderId::new(id), self.number, region, delivery_type))
    }
}

/// An order line joined with its product; product columns are null when
/// the reference dangles.
#[derive(Debug, sqlx::FromRow)]
struct LineRow {
    line_id: i64,
    product_id: i64,
    quantity: i32,
    code: Option<String>,
    name: Option<String>,
    weight_kg: Option<Decimal>,
    volume_m3: Option<Decimal>,
}

impl LineRow {
    fn try_into_line(self) -> RepositoryResult<ResolvedLine> {
        let (Some(code), Some(name), Some(weight_kg), Some(volume_m3)) =
            (self.code, self.name, self.weight_kg, self.volume_m3)
        else {
            return Err(RepositoryError::not_found("Product", self.product_id));
        };

        let line_id = self.line_id;
        let product = Product::new(ProductId::new(self.product_id), code, name, weight_kg, volume_m3)
            .map_err(|e| invalid_row("products", self.product_id, e))?;
        let quantity =
            u32::try_from(self.quantity).map_err(|e| invalid_row("order_lines", line_id, e))?;

        ResolvedLine::new(product, quantity).map_err(|e| invalid_row("order_lines", line_id, e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(quantity: i32, with_product: bool) -> LineRow {
        LineRow {
            line_id: 1,
            product_id: 8,
            quantity,
            code: with_product.then(|| "SOFA".to_string()),
            name: with_product.then(|| "Sofa".to_string()),
            weight_kg: with_product.then(|| Decimal::new(28, 0)),
            volume_m3: with_product.then(|| Decimal::new(15, 1)),
        }
    }

    #[test]
    fn maps_joined_line() {
        let resolved = line(2, true).try_into_line().unwrap();
        assert_eq!(resolved.quantity(), 2);
        assert_eq!(resolved.product().code(), "SOFA");
    }

    #[test]
    fn dangling_product_is_not_found() {
        assert!(line(1, false).try_into_line().unwrap_err().is_not_found());
    }

    #[test]
    fn non_positive_quantity_is_a_data_defect() {
        assert!(line(0, true).try_into_line().unwrap_err().is_data_defect());
        assert!(line(-3, true).try_into_line().unwrap_err().is_data_defect());
    }

    #[test]
    fn unknown_delivery_type_is_a_data_defect() {
        let row = OrderRow {
            id: 1,
            number: "PED-001".to_string(),
            region: "Madrid".to_string(),
            delivery_type: "drone".to_string(),
        };
        assert!(row.try_into_order().unwrap_err().is_data_defect());
    }
}

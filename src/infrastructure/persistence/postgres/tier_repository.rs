//! # PostgreSQL Tier Repository

use crate::domain::entities::{Tier, TierRecord};
use crate::domain::value_objects::{Price, Region, ServiceId, TierId, TierRange};
use crate::infrastructure::persistence::postgres::{invalid_row, map_sqlx_error};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TierRepository,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// PostgreSQL implementation of [`TierRepository`].
#[derive(Debug, Clone)]
pub struct PostgresTierRepository {
    pool: PgPool,
}

impl PostgresTierRepository {
    /// Creates a repository over `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TierRepository for PostgresTierRepository {
    async fn find_matching(
        &self,
        service_id: ServiceId,
        regions: &[Region],
        metric: Decimal,
    ) -> RepositoryResult<Vec<Tier>> {
        let labels: Vec<String> = regions.iter().map(|r| r.as_str().to_string()).collect();

        let rows: Vec<TierRow> = sqlx::query_as(
            r#"
            SELECT id, service_id, region, min_value, max_value, price
            FROM rate_tiers
            WHERE service_id = $1
              AND region = ANY($2)
              AND min_value <= $3
              AND (max_value IS NULL OR $3 <= max_value)
            ORDER BY id ASC
            "#,
        )
        .bind(service_id.get())
        .bind(&labels)
        .bind(metric)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(TierRow::try_into_tier).collect()
    }

    async fn find_by_service(&self, service_id: ServiceId) -> RepositoryResult<Vec<Tier>> {
        let rows: Vec<TierRow> = sqlx::query_as(
            r#"
            SELECT id, service_id, region, min_value, max_value, price
            FROM rate_tiers
            WHERE service_id = $1
            ORDER BY region ASC, min_value ASC, id ASC
            "#,
        )
        .bind(service_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(TierRow::try_into_tier).collect()
    }

    async fn upsert(&self, record: TierRecord) -> RepositoryResult<TierId> {
        let (id,): (i64,) = match record.id {
            Some(id) => sqlx::query_as(
                r#"
                UPDATE rate_tiers
                SET service_id = $2, region = $3, min_value = $4, max_value = $5, price = $6
                WHERE id = $1
                RETURNING id
                "#,
            )
            .bind(id.get())
            .bind(record.service_id.get())
            .bind(record.region.as_str())
            .bind(record.range.min())
            .bind(record.range.max())
            .bind(record.price.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| RepositoryError::not_found("Tier", id))?,
            None => sqlx::query_as(
                r#"
                INSERT INTO rate_tiers (service_id, region, min_value, max_value, price)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (service_id, region, min_value, max_value)
                DO UPDATE SET price = EXCLUDED.price
                RETURNING id
                "#,
            )
            .bind(record.service_id.get())
            .bind(record.region.as_str())
            .bind(record.range.min())
            .bind(record.range.max())
            .bind(record.price.get())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?,
        };

        Ok(TierId::new(id))
    }
}

/// Row type for tier queries.
#[derive(Debug, sqlx::FromRow)]
struct TierRow {
    id: i64,
    service_id: i64,
    region: String,
    min_value: Decimal,
    max_value: Option<Decimal>,
    price: Decimal,
}

impl TierRow {
    fn try_into_tier(self) -> RepositoryResult<Tier> {
        let id = self.id;
        let region = Region::new(self.region).map_err(|e| invalid_row("rate_tiers", id, e))?;
        let range = TierRange::new(self.min_value, self.max_value)
            .map_err(|e| invalid_row("rate_tiers", id, e))?;
        let price = Price::new(self.price).map_err(|e| invalid_row("rate_tiers", id, e))?;

        Ok(Tier::new(TierId::new(id), ServiceId::new(self.service_id), region, range, price))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(min: i64, max: Option<i64>, price: i64) -> TierRow {
        TierRow {
            id: 3,
            service_id: 1,
            region: "Madrid".to_string(),
            min_value: Decimal::new(min, 0),
            max_value: max.map(|m| Decimal::new(m, 0)),
            price: Decimal::new(price, 0),
        }
    }

    #[test]
    fn maps_open_ended_row() {
        let tier = row(500, None, 90).try_into_tier().unwrap();
        assert!(tier.range().is_open_ended());
        assert_eq!(tier.id(), TierId::new(3));
    }

    #[test]
    fn inverted_range_is_a_data_defect() {
        let err = row(100, Some(50), 10).try_into_tier().unwrap_err();
        assert!(err.is_data_defect());
    }

    #[test]
    fn negative_price_is_a_data_defect() {
        assert!(row(0, None, -1).try_into_tier().unwrap_err().is_data_defect());
    }
}

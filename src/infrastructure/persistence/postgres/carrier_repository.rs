//! # PostgreSQL Carrier Repository

use crate::domain::entities::{Carrier, CarrierService, ServiceOffering};
use crate::domain::value_objects::{CalculationMethod, CarrierId, DeliveryType, ServiceId};
use crate::infrastructure::persistence::postgres::{invalid_row, map_sqlx_error};
use crate::infrastructure::persistence::traits::{CarrierRepository, RepositoryResult};
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of [`CarrierRepository`].
///
/// # Examples
///
/// ```ignore
/// let pool = carrier_select::infrastructure::persistence::postgres::connect(url, 5).await?;
/// let carriers = PostgresCarrierRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresCarrierRepository {
    pool: PgPool,
}

impl PostgresCarrierRepository {
    /// Creates a repository over `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CarrierRepository for PostgresCarrierRepository {
    async fn find_active_offerings(
        &self,
        delivery_type: DeliveryType,
    ) -> RepositoryResult<Vec<ServiceOffering>> {
        let rows: Vec<OfferingRow> = sqlx::query_as(
            r#"
            SELECT c.id AS carrier_id, c.name AS carrier_name, c.active AS carrier_active,
                   s.id AS service_id, s.delivery_type, s.calculation_method,
                   s.active AS service_active
            FROM carrier_services s
            JOIN carriers c ON c.id = s.carrier_id
            WHERE s.active AND c.active AND s.delivery_type = $1
            ORDER BY c.id ASC, s.id ASC
            "#,
        )
        .bind(delivery_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(OfferingRow::try_into_offering).collect()
    }

    async fn get_carrier(&self, id: CarrierId) -> RepositoryResult<Option<Carrier>> {
        let row: Option<CarrierRow> =
            sqlx::query_as("SELECT id, name, active FROM carriers WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(CarrierRow::into_carrier))
    }

    async fn find_services(&self, carrier_id: CarrierId) -> RepositoryResult<Vec<CarrierService>> {
        let rows: Vec<ServiceRow> = sqlx::query_as(
            r#"
            SELECT id, carrier_id, delivery_type, calculation_method, active
            FROM carrier_services
            WHERE carrier_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(carrier_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ServiceRow::try_into_service).collect()
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CarrierRow {
    id: i64,
    name: String,
    active: bool,
}

impl CarrierRow {
    fn into_carrier(self) -> Carrier {
        Carrier::new(CarrierId::new(self.id), self.name).with_active(self.active)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    carrier_id: i64,
    delivery_type: String,
    calculation_method: String,
    active: bool,
}

impl ServiceRow {
    fn try_into_service(self) -> RepositoryResult<CarrierService> {
        parse_service(
            self.id,
            self.carrier_id,
            &self.delivery_type,
            &self.calculation_method,
            self.active,
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OfferingRow {
    carrier_id: i64,
    carrier_name: String,
    carrier_active: bool,
    service_id: i64,
    delivery_type: String,
    calculation_method: String,
    service_active: bool,
}

impl OfferingRow {
    fn try_into_offering(self) -> RepositoryResult<ServiceOffering> {
        let carrier = Carrier::new(CarrierId::new(self.carrier_id), self.carrier_name)
            .with_active(self.carrier_active);
        let service = parse_service(
            self.service_id,
            self.carrier_id,
            &self.delivery_type,
            &self.calculation_method,
            self.service_active,
        )?;
        ServiceOffering::new(carrier, service).ok_or_else(|| {
            invalid_row("carrier_services", self.service_id, "carrier join mismatch")
        })
    }
}

fn parse_service(
    id: i64,
    carrier_id: i64,
    delivery_type: &str,
    calculation_method: &str,
    active: bool,
) -> RepositoryResult<CarrierService> {
    let delivery_type: DeliveryType = delivery_type
        .parse()
        .map_err(|e| invalid_row("carrier_services", id, e))?;
    let calculation_method: CalculationMethod = calculation_method
        .parse()
        .map_err(|e| invalid_row("carrier_services", id, e))?;

    Ok(CarrierService::new(
        ServiceId::new(id),
        CarrierId::new(carrier_id),
        delivery_type,
        calculation_method,
    )
    .with_active(active))
}

//! # PostgreSQL Repositories
//!
//! sqlx-backed implementations of the repository ports. The schema lives
//! in `migrations/0001_initial_schema.sql`.
//!
//! Enum columns are stored as their snake_case labels and parsed on read;
//! an unrecognized label surfaces as `RepositoryError::Serialization`.

pub mod carrier_repository;
pub mod order_repository;
pub mod tier_repository;

pub use carrier_repository::PostgresCarrierRepository;
pub use order_repository::PostgresOrderRepository;
pub use tier_repository::PostgresTierRepository;

use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::fmt;

/// Opens a connection pool.
///
/// # Errors
///
/// Returns `RepositoryError::Connection` if the database is unreachable.
pub async fn connect(url: &str, max_connections: u32) -> RepositoryResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(|e| RepositoryError::connection(e.to_string()))
}

/// Maps a sqlx failure onto the repository error vocabulary.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::connection(err.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::serialization(err.to_string())
        }
        other => RepositoryError::query(other.to_string()),
    }
}

/// Maps a failed domain conversion of a stored value.
pub(crate) fn invalid_row(table: &str, id: i64, err: impl fmt::Display) -> RepositoryError {
    RepositoryError::serialization(format!("{table} row {id}: {err}"))
}

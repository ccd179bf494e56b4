//! PostgreSQL adapters - read-side repositories backed by `sqlx`.
//!
//! - `PostgresOrganizationRepository` - organizations by slug
//! - `PostgresProjectRepository` - projects by slug within an organization
//! - `connect` - pool setup with optional migrations

mod organization_repository;
mod pool;
mod project_repository;

pub use organization_repository::PostgresOrganizationRepository;
pub use pool::connect;
pub use project_repository::PostgresProjectRepository;

use sqlx::Row;

use crate::domain::foundation::{DomainError, ErrorCode};

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

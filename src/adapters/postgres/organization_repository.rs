//! PostgreSQL implementation of OrganizationRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId};
use crate::domain::organization::{Organization, Slug};
use crate::ports::OrganizationRepository;

/// Reads organizations from the `organizations` table.
#[derive(Clone)]
pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Organization>, DomainError> {
        let row = sqlx::query("SELECT id, slug, name FROM organizations WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch organization: {}", e),
                )
            })?;

        row.map(row_to_organization).transpose()
    }
}

fn row_to_organization(row: sqlx::postgres::PgRow) -> Result<Organization, DomainError> {
    let id: uuid::Uuid = super::column(&row, "id")?;
    let slug: String = super::column(&row, "slug")?;
    let name: String = super::column(&row, "name")?;

    Ok(Organization::new(
        OrganizationId::from_uuid(id),
        Slug::new(slug)?,
        name,
    ))
}

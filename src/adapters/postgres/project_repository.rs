//! PostgreSQL implementation of ProjectRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, OrganizationId, ProjectId};
use crate::domain::organization::{Project, Slug};
use crate::ports::ProjectRepository;

/// Reads projects from the `projects` table.
#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_slug_in_organization(
        &self,
        organization_id: &OrganizationId,
        slug: &Slug,
    ) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, organization_id, slug, name
            FROM projects
            WHERE organization_id = $1 AND slug = $2
            "#,
        )
        .bind(organization_id.as_uuid())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch project: {}", e),
            )
        })?;

        row.map(row_to_project).transpose()
    }
}

fn row_to_project(row: sqlx::postgres::PgRow) -> Result<Project, DomainError> {
    let id: uuid::Uuid = super::column(&row, "id")?;
    let organization_id: uuid::Uuid = super::column(&row, "organization_id")?;
    let slug: String = super::column(&row, "slug")?;
    let name: String = super::column(&row, "name")?;

    Ok(Project::new(
        ProjectId::from_uuid(id),
        OrganizationId::from_uuid(organization_id),
        Slug::new(slug)?,
        name,
    ))
}

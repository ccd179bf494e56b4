//! Project repository port (read side).
//!
//! The shell only ever looks projects up by slug inside an organization.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OrganizationId};
use crate::domain::organization::{Project, Slug};

/// Read access to projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find a project by slug within an organization.
    ///
    /// Returns `None` if no such project exists. A miss is not an error.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on storage failure
    async fn find_by_slug_in_organization(
        &self,
        organization_id: &OrganizationId,
        slug: &Slug,
    ) -> Result<Option<Project>, DomainError>;
}

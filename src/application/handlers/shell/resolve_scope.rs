//! ResolveScopeHandler - Query handler turning routing data into a Scope.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::organization::Slug;
use crate::domain::shell::Scope;
use crate::ports::OrganizationRepository;

/// Query describing which route family matched.
#[derive(Debug, Clone, Default)]
pub struct ResolveScopeQuery {
    pub organization_slug: Option<String>,
    pub demo: bool,
}

impl ResolveScopeQuery {
    pub fn generic(demo: bool) -> Self {
        Self {
            organization_slug: None,
            demo,
        }
    }

    pub fn organization(slug: impl Into<String>, demo: bool) -> Self {
        Self {
            organization_slug: Some(slug.into()),
            demo,
        }
    }
}

/// Handler resolving the shell scope for a routed request.
pub struct ResolveScopeHandler {
    organizations: Arc<dyn OrganizationRepository>,
}

impl ResolveScopeHandler {
    pub fn new(organizations: Arc<dyn OrganizationRepository>) -> Self {
        Self { organizations }
    }

    /// Resolve the scope.
    ///
    /// # Errors
    ///
    /// - `OrganizationNotFound` when the slug is malformed or unknown
    /// - `DatabaseError` when the lookup itself fails
    pub async fn handle(&self, query: ResolveScopeQuery) -> Result<Scope, DomainError> {
        let Some(raw_slug) = query.organization_slug else {
            return Ok(Scope::new(None, query.demo));
        };

        let not_found = || {
            DomainError::new(ErrorCode::OrganizationNotFound, "Organization not found")
                .with_detail("slug", raw_slug.clone())
        };

        let slug = Slug::new(raw_slug.as_str()).map_err(|_| not_found())?;
        let organization = self
            .organizations
            .find_by_slug(&slug)
            .await?
            .ok_or_else(not_found)?;

        Ok(Scope::new(Some(organization), query.demo))
    }
}

//! In-memory organization lookup.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::organization::{Organization, Slug};
use crate::ports::OrganizationRepository;

/// Organizations keyed by slug.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOrganizationRepository {
    organizations: Arc<RwLock<HashMap<Slug, Organization>>>,
}

impl InMemoryOrganizationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organizations(organizations: impl IntoIterator<Item = Organization>) -> Self {
        let organizations = organizations
            .into_iter()
            .map(|o| (o.slug.clone(), o))
            .collect();
        Self {
            organizations: Arc::new(RwLock::new(organizations)),
        }
    }

    /// Adds or replaces an organization.
    pub async fn insert(&self, organization: Organization) {
        self.organizations
            .write()
            .await
            .insert(organization.slug.clone(), organization);
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Organization>, DomainError> {
        Ok(self.organizations.read().await.get(slug).cloned())
    }
}

//! In-memory project lookup.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OrganizationId};
use crate::domain::organization::{Project, Slug};
use crate::ports::ProjectRepository;

/// Projects keyed by (organization, slug).
#[derive(Debug, Default, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<(OrganizationId, Slug), Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let projects = projects
            .into_iter()
            .map(|p| ((p.organization_id, p.slug.clone()), p))
            .collect();
        Self {
            projects: Arc::new(RwLock::new(projects)),
        }
    }

    /// Adds or replaces a project.
    pub async fn insert(&self, project: Project) {
        self.projects
            .write()
            .await
            .insert((project.organization_id, project.slug.clone()), project);
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_slug_in_organization(
        &self,
        organization_id: &OrganizationId,
        slug: &Slug,
    ) -> Result<Option<Project>, DomainError> {
        Ok(self
            .projects
            .read()
            .await
            .get(&(*organization_id, slug.clone()))
            .cloned())
    }
}

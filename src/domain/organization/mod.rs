//! Organizations and the projects they own.
//!
//! These are read-only views for the shell renderer: the renderer only
//! needs to address an organization and look a project up by slug.

mod slug;

pub use slug::{Slug, MAX_SLUG_LENGTH};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrganizationId, ProjectId};

/// An organization that scopes projects and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub slug: Slug,
    pub name: String,
}

impl Organization {
    pub fn new(id: OrganizationId, slug: Slug, name: impl Into<String>) -> Self {
        Self {
            id,
            slug,
            name: name.into(),
        }
    }
}

/// A project belonging to exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub organization_id: OrganizationId,
    pub slug: Slug,
    pub name: String,
}

impl Project {
    pub fn new(
        id: ProjectId,
        organization_id: OrganizationId,
        slug: Slug,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            organization_id,
            slug,
            name: name.into(),
        }
    }

    /// Returns true if this project is owned by the given organization.
    pub fn belongs_to(&self, organization_id: &OrganizationId) -> bool {
        &self.organization_id == organization_id
    }
}

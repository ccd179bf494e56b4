//! Organization repository port (read side).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::organization::{Organization, Slug};

/// Read access to organizations, used by routing to resolve a `Scope`.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Find an organization by its URL slug.
    ///
    /// Returns `None` if not found.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Organization>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OrganizationRepository) {}
    }
}

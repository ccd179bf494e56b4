//! In-memory repositories.
//!
//! Used when no database is configured and in tests.

mod organization_repository;
mod project_repository;

pub use organization_repository::InMemoryOrganizationRepository;
pub use project_repository::InMemoryProjectRepository;

//! Domain events emitted while serving the shell.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, EventId, OrganizationId, ProjectId, Timestamp, UserId,
};
use crate::domain::organization::{Project, Slug};

/// Event type published when onboarding starts waiting for a project's first event.
pub const FIRST_EVENT_PENDING: &str = "first_event_pending.v1";

/// A user opened a project's onboarding page and is waiting for its first event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstEventPending {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub project_slug: Slug,
    pub organization_id: OrganizationId,
    pub user_id: Option<UserId>,
    pub sender: String,
    pub occurred_at: Timestamp,
}

impl FirstEventPending {
    pub fn new(project: &Project, user_id: Option<UserId>, sender: impl Into<String>) -> Self {
        Self {
            event_id: EventId::new(),
            project_id: project.id,
            project_slug: project.slug.clone(),
            organization_id: project.organization_id,
            user_id,
            sender: sender.into(),
            occurred_at: Timestamp::now(),
        }
    }
}

domain_event!(
    FirstEventPending,
    event_type = FIRST_EVENT_PENDING,
    schema_version = 1,
    aggregate_id = project_id,
    aggregate_type = "Project",
    occurred_at = occurred_at,
    event_id = event_id
);

//! OnboardingLogHandler - logs onboarding signals published on the bus.
//!
//! Stands in for the downstream consumer that watches a project for its
//! first ingested event.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::domain::shell::FirstEventPending;
use crate::ports::EventHandler;

/// Handles `first_event_pending.v1` by writing a structured log line.
#[derive(Debug, Default)]
pub struct OnboardingLogHandler {
    handled: AtomicU64,
}

impl OnboardingLogHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events handled so far.
    pub fn handled(&self) -> u64 {
        self.handled.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventHandler for OnboardingLogHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let pending: FirstEventPending = event
            .payload_as()
            .map_err(|e| DomainError::new(ErrorCode::ValidationFailed, e.to_string()))?;

        info!(
            event_id = %event.event_id,
            project_id = %pending.project_id,
            project_slug = %pending.project_slug,
            organization_id = %pending.organization_id,
            user_id = pending.user_id.as_ref().map(|u| u.as_str()).unwrap_or("-"),
            sender = %pending.sender,
            "Project is waiting for its first event"
        );

        self.handled.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "OnboardingLogHandler"
    }
}

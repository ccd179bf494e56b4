//! EventSubscriber port - registering handlers for domain events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler invoked for each matching event.
///
/// ```ignore
/// #[async_trait]
/// impl EventHandler for OnboardingLogHandler {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let pending: FirstEventPending = event.payload_as()?;
///         info!(project = %pending.project_slug, "waiting for first event");
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "OnboardingLogHandler"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Name used in error messages and log fields.
    fn name(&self) -> &'static str;
}

/// Port for subscribing handlers to event types.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe `handler` to `event_type` (e.g. `first_event_pending.v1`).
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe one handler instance to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// A bus both publishes and dispatches to subscribers.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ports_are_object_safe() {
        fn _accepts_handler(_handler: &dyn EventHandler) {}
        fn _accepts_subscriber(_subscriber: &dyn EventSubscriber) {}
        fn _accepts_bus(_bus: &dyn EventBus) {}
    }
}

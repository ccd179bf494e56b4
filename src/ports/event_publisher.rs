//! EventPublisher port - publishing domain events.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// The shell publishes fire-and-forget: a failed publish is logged by the
/// caller and never changes the rendered page.
///
/// ```ignore
/// let envelope = FirstEventPending::new(&project, user_id, SHELL_SENDER).to_envelope()?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    ///
    /// # Errors
    ///
    /// - `InternalError` when delivery or a subscribed handler fails
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn EventPublisher) {}
    }
}

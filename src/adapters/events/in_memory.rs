//! In-memory event bus.
//!
//! Delivers events to subscribed handlers in-process, in subscription order,
//! before `publish` returns. A bounded history of published envelopes is kept
//! for inspection.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// Default number of envelopes retained in the history.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// In-process event bus.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.subscribe(FIRST_EVENT_PENDING, Arc::new(OnboardingLogHandler::new()));
///
/// bus.publish(envelope).await?;
/// assert!(bus.has_event(FIRST_EVENT_PENDING));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: RwLock<VecDeque<EventEnvelope>>,
    history_limit: usize,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates a bus keeping at most `limit` envelopes, dropping the oldest.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(VecDeque::new()),
            history_limit: limit,
        }
    }

    /// Returns the retained envelopes, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }

    fn record(&self, event: &EventEnvelope) {
        if self.history_limit == 0 {
            return;
        }
        let mut published = self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        while published.len() >= self.history_limit {
            published.pop_front();
        }
        published.push_back(event.clone());
    }

    fn handlers_for(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.record(&event);

        // Locks are released before handlers run.
        let type_handlers = self.handlers_for(&event.event_type);

        let mut errors = Vec::new();
        for handler in type_handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for event_type in event_types {
            handlers
                .entry(event_type.to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shell::FIRST_EVENT_PENDING;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "Project", json!({}))
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    struct RecordingHandler {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl EventHandler for RecordingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.log.lock().unwrap().push(self.label);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "RecordingHandler"
        }
    }

    #[tokio::test]
    async fn publish_records_event_with_schema_version() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope(FIRST_EVENT_PENDING, "p-1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event(FIRST_EVENT_PENDING));
        assert_eq!(bus.published_events()[0].schema_version, 1);
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope("type.a", "p-1")).await.unwrap();
        bus.publish(envelope("type.b", "p-2")).await.unwrap();
        bus.publish(envelope("type.a", "p-2")).await.unwrap();

        assert_eq!(bus.events_of_type("type.a").len(), 2);
        assert_eq!(bus.events_for_aggregate("p-2").len(), 2);
    }

    #[tokio::test]
    async fn handlers_run_in_subscription_order() {
        let bus = InMemoryEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            bus.subscribe(
                FIRST_EVENT_PENDING,
                Arc::new(RecordingHandler {
                    label,
                    log: log.clone(),
                }),
            );
        }
        bus.publish(envelope(FIRST_EVENT_PENDING, "p-1")).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn subscribe_all_registers_for_each_type() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe_all(
            &["type.a", "type.b"],
            Arc::new(CountingHandler(counter.clone())),
        );
        bus.publish(envelope("type.a", "1")).await.unwrap();
        bus.publish(envelope("type.b", "2")).await.unwrap();
        bus.publish(envelope("type.c", "3")).await.unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn history_is_bounded() {
        let bus = InMemoryEventBus::with_history_limit(2);

        bus.publish(envelope("type.a", "1")).await.unwrap();
        bus.publish(envelope("type.a", "2")).await.unwrap();
        bus.publish(envelope("type.a", "3")).await.unwrap();

        let ids: Vec<_> = bus
            .published_events()
            .into_iter()
            .map(|e| e.aggregate_id)
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn zero_history_still_delivers() {
        let bus = InMemoryEventBus::with_history_limit(0);
        let counter = Arc::new(AtomicUsize::new(0));
        bus.subscribe("type.a", Arc::new(CountingHandler(counter.clone())));

        bus.publish(envelope("type.a", "1")).await.unwrap();

        assert_eq!(bus.event_count(), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn clear_empties_history() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![envelope("type.a", "1"), envelope("type.b", "2")])
            .await
            .unwrap();

        bus.clear();

        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn handler_error_names_the_handler() {
        struct FailingHandler;

        #[async_trait]
        impl EventHandler for FailingHandler {
            async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
                Err(DomainError::new(ErrorCode::InternalError, "boom"))
            }
            fn name(&self) -> &'static str {
                "FailingHandler"
            }
        }

        let bus = InMemoryEventBus::new();
        bus.subscribe("type.a", Arc::new(FailingHandler));

        let err = bus.publish(envelope("type.a", "1")).await.unwrap_err();

        assert!(err.message.contains("FailingHandler"));
        assert_eq!(bus.event_count(), 1);
    }
}

//! MessageQueue port - one-time user-facing messages.
//!
//! Messages are attached to the client identified by the request and shown
//! on a later page load. Enqueueing never alters the current response.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::shell::{FlashMessage, RequestContext};

/// Port for queuing flash messages.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Queue a message for the client behind `request`.
    async fn enqueue(&self, request: &RequestContext, message: FlashMessage)
        -> Result<(), DomainError>;

    /// Remove and return all messages queued for a client, oldest first.
    async fn drain(&self, request: &RequestContext) -> Result<Vec<FlashMessage>, DomainError>;
}

//! TakeMessagesHandler - Query handler returning and clearing queued messages.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::shell::{FlashMessage, RequestContext};
use crate::ports::MessageQueue;

/// Handler draining the flash messages of the requesting client.
pub struct TakeMessagesHandler {
    messages: Arc<dyn MessageQueue>,
}

impl TakeMessagesHandler {
    pub fn new(messages: Arc<dyn MessageQueue>) -> Self {
        Self { messages }
    }

    /// Returns every pending message once; a second call yields nothing new.
    pub async fn handle(&self, request: &RequestContext) -> Result<Vec<FlashMessage>, DomainError> {
        self.messages.drain(request).await
    }
}

//! Session-backed flash messages.
//!
//! Messages are stored in the client's `tower-sessions` session through
//! `axum-messages`. A message queued while handling one request is delivered
//! on the next one. The session cookie is only issued once something has been
//! queued, so plain page views stay sessionless.

use async_trait::async_trait;
use axum_messages::{Level, Message, Messages};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;
use tracing::debug;

use crate::config::SessionConfig;
use crate::domain::foundation::DomainError;
use crate::domain::shell::{FlashMessage, MessageLevel, RequestContext};
use crate::ports::MessageQueue;

/// Session layer backing the message queue.
///
/// The in-memory store holds at most `max_sessions` sessions and drops the
/// least recently used beyond that; idle sessions expire.
pub fn session_layer(config: &SessionConfig) -> SessionManagerLayer<MokaStore> {
    let store = MokaStore::new(Some(config.max_sessions));
    SessionManagerLayer::new(store)
        .with_name(config.cookie_name.clone())
        .with_secure(config.cookie_secure)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(i64::from(
            config.idle_timeout_secs,
        ))))
}

/// Message queue bound to the session of one request.
#[derive(Clone)]
pub struct SessionMessageQueue {
    messages: Messages,
}

impl SessionMessageQueue {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl MessageQueue for SessionMessageQueue {
    async fn enqueue(
        &self,
        request: &RequestContext,
        message: FlashMessage,
    ) -> Result<(), DomainError> {
        debug!(path = request.path(), level = %message.level, "Queued flash message");

        let messages = self.messages.clone();
        match message.level {
            MessageLevel::Debug => messages.debug(message.text),
            MessageLevel::Info => messages.info(message.text),
            MessageLevel::Success => messages.success(message.text),
            MessageLevel::Warning => messages.warning(message.text),
            MessageLevel::Error => messages.error(message.text),
        };
        Ok(())
    }

    async fn drain(&self, _request: &RequestContext) -> Result<Vec<FlashMessage>, DomainError> {
        Ok(self.messages.clone().map(flash_message).collect())
    }
}

fn flash_message(message: Message) -> FlashMessage {
    let level = match message.level {
        Level::Debug => MessageLevel::Debug,
        Level::Info => MessageLevel::Info,
        Level::Success => MessageLevel::Success,
        Level::Warning => MessageLevel::Warning,
        Level::Error => MessageLevel::Error,
    };
    FlashMessage::new(level, message.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::header::{COOKIE, SET_COOKIE};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use axum::routing::get;
    use axum::{Json, Router};
    use axum_messages::MessagesManagerLayer;
    use tower::ServiceExt;

    async fn queue_message(messages: Messages) -> StatusCode {
        let queue = SessionMessageQueue::new(messages);
        queue
            .enqueue(&RequestContext::new("/demo/"), FlashMessage::demo_disclaimer())
            .await
            .unwrap();
        queue
            .enqueue(
                &RequestContext::new("/demo/"),
                FlashMessage::new(MessageLevel::Info, "second"),
            )
            .await
            .unwrap();
        StatusCode::NO_CONTENT
    }

    async fn drain_messages(messages: Messages) -> Json<Vec<FlashMessage>> {
        let queue = SessionMessageQueue::new(messages);
        Json(queue.drain(&RequestContext::new("/")).await.unwrap())
    }

    async fn leave_messages_alone(_messages: Messages) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    fn router() -> Router {
        Router::new()
            .route("/idle", get(leave_messages_alone))
            .route("/queue", get(queue_message))
            .route("/drain", get(drain_messages))
            .layer(MessagesManagerLayer)
            .layer(session_layer(&SessionConfig::default()))
    }

    async fn get_with(router: &Router, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn session_cookie(response: &Response) -> Option<String> {
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("sessionid="))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    async fn drained(router: &Router, cookie: Option<&str>) -> Vec<FlashMessage> {
        let response = get_with(router, "/drain", cookie).await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn queued_messages_are_delivered_once_on_a_later_request() {
        let router = router();

        let response = get_with(&router, "/queue", None).await;
        let cookie = session_cookie(&response).expect("session cookie issued");

        let first = drained(&router, Some(&cookie)).await;
        assert_eq!(
            first,
            vec![
                FlashMessage::demo_disclaimer(),
                FlashMessage::new(MessageLevel::Info, "second"),
            ]
        );
        assert!(drained(&router, Some(&cookie)).await.is_empty());
    }

    #[tokio::test]
    async fn sessionless_clients_do_not_see_each_others_messages() {
        let router = router();

        get_with(&router, "/queue", None).await;

        assert!(drained(&router, None).await.is_empty());
    }

    #[tokio::test]
    async fn no_session_cookie_without_a_queued_message() {
        let router = router();

        let response = get_with(&router, "/idle", None).await;

        assert!(session_cookie(&response).is_none());
    }

    #[tokio::test]
    async fn unknown_session_id_is_replaced() {
        let router = router();

        let response = get_with(&router, "/queue", Some("sessionid=junk")).await;
        let cookie = session_cookie(&response).expect("session cookie issued");

        assert_ne!(cookie, "sessionid=junk");
        assert!(drained(&router, Some("sessionid=junk")).await.is_empty());
        assert_eq!(drained(&router, Some(&cookie)).await.len(), 2);
    }
}

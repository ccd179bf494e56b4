//! Flash message adapters.

mod session;

pub use session::{session_layer, SessionMessageQueue};

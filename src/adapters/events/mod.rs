//! Event bus adapters.
//!
//! - `InMemoryEventBus` - in-process bus with bounded history
//! - `OnboardingLogHandler` - subscriber logging onboarding signals

mod in_memory;
mod onboarding_log;

pub use in_memory::{InMemoryEventBus, DEFAULT_HISTORY_LIMIT};
pub use onboarding_log::OnboardingLogHandler;

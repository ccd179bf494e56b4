//! Application layer - Handlers orchestrating the shell request flow.
//!
//! Handlers coordinate domain types and ports. They never touch HTTP types
//! beyond the status code carried by a rendered response.

pub mod handlers;

pub use handlers::{
    PageRenderer, ResolveScopeHandler, ResolveScopeQuery, ShellResponse, TakeMessagesHandler,
    SHELL_SENDER, TEXT_HTML,
};

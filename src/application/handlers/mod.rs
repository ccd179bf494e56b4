//! Application handlers.

pub mod shell;

pub use shell::{
    PageRenderer, ResolveScopeHandler, ResolveScopeQuery, ShellResponse, TakeMessagesHandler,
    SHELL_SENDER, TEXT_HTML,
};

//! Shell handlers.

mod render_shell;
mod resolve_scope;
mod take_messages;

pub use render_shell::{PageRenderer, ShellResponse, SHELL_SENDER, TEXT_HTML};
pub use resolve_scope::{ResolveScopeHandler, ResolveScopeQuery};
pub use take_messages::TakeMessagesHandler;

//! Command interpreter, line editor, and shell session.
//!
//! The interpreter is a registry-based dispatch system over a closed set of
//! command names. A [`Shell`] owns one session's filesystem, working
//! directory, and history, and routes each input line either to the
//! interpreter or, while `ai-edit` is open, to the line editor.

mod commands;
pub mod editor;
mod file_commands;
pub mod help_text;
mod interpreter;
mod network_commands;
mod result;
mod shell;
mod system_commands;
#[cfg(test)]
mod testing;
mod text_commands;

/// Register every built-in command into a registry.
pub use commands::register_builtins;
/// Keystrokes, state, and rendering of the `ai-edit` buffer.
pub use editor::{EditorKey, EditorState, EditorStatus, LineEditor};
/// Closed set of command names and the handler registry.
pub use interpreter::{Category, Command, CommandName, CommandRegistry, Environment};
/// Uniform result of every `execute` call.
pub use result::CommandResult;
/// Session state machine and its collaborator hooks.
pub use shell::{LogHooks, Mode, SessionHooks, SessionSnapshot, Shell, TreeSnapshot};
/// Output of `clear`.
pub use system_commands::CLEAR_SCREEN;

//! Channel model and command interpreter.
//!
//! Text flows through typed channels. An [`InputChannel`] collects typed
//! characters; an [`OutputChannel`] holds display lines. The terminal output
//! variant echoes every submitted line and then interprets it as
//! semicolon-separated commands dispatched through a [`CommandRegistry`].

mod channel;
mod commands;
mod format;
mod input;
mod interpreter;
mod io_pair;
mod output;

/// Ordered text buffer shared by every channel kind.
pub use channel::ChannelBuffer;
/// Direction/command type tag of a channel.
pub use channel::ChannelType;
/// Free-function form of [`ChannelType::is_subtype_of`].
pub use channel::is_subtype_of;
/// Register `clear`, `out` and `lc` into a registry.
pub use commands::register_builtins;
/// Ordered and named values for template substitution.
pub use format::FormatArgs;
/// Substitute `{}` / `{0}` / `{name}` placeholders.
pub use format::format_template;
/// Input channel variants.
pub use input::{InputChannel, TerminalInput};
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Mutable view of the output state passed to every command.
pub use interpreter::Environment;
/// Split command text into token lists.
pub use interpreter::split_commands;
/// One input channel plus one output channel.
pub use io_pair::IoPair;
/// Output channel variants.
pub use output::{OutputChannel, TerminalOutput};

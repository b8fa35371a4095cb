//! Command trait, registry, and dispatch logic.
//!
//! Command text is split on `;` into commands and each command on single
//! spaces into tokens. The first token names the command; the rest are its
//! arguments. Errors returned by a command are written to the output as a
//! line, so nothing escapes the interpreter.

use std::collections::HashMap;
use std::fmt;

use vterm_types::error::Result;

use crate::channel::ChannelBuffer;

/// Mutable view of the terminal output passed to every command.
pub struct Environment<'a> {
    /// The output line buffer.
    pub lines: &'a mut ChannelBuffer,
    /// Whether `get()` numbers the lines.
    pub line_count: &'a mut bool,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Usage string (e.g. "out \[text\]").
    fn usage(&self) -> &str;

    /// Execute with the tokens after the command name.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()>;
}

/// Registry of available commands with dispatch.
///
/// `help` is answered by the registry itself since it needs the command list.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Sorted names of every command the registry answers, `help` included.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        if !self.commands.contains_key("help") {
            names.push("help");
        }
        names.sort_unstable();
        names
    }

    /// Run one tokenized command against `env`.
    ///
    /// Command names are case-sensitive. Unknown names and command errors
    /// each produce one output line.
    pub fn dispatch(&self, tokens: &[&str], env: &mut Environment<'_>) {
        let Some((&name, args)) = tokens.split_first() else {
            return;
        };
        log::debug!("dispatch {name} {args:?}");

        if name == "help" && !self.commands.contains_key("help") {
            self.execute_help(env);
            return;
        }

        match self.commands.get(name) {
            Some(cmd) => {
                if let Err(e) = cmd.execute(args, env) {
                    log::debug!("{name} failed: {e}");
                    env.lines.put(e.to_string());
                }
            },
            None => {
                log::debug!("unknown command {name:?}");
                env.lines.put(format!("Unknown Command \"{name}\""));
            },
        }
    }

    fn execute_help(&self, env: &mut Environment<'_>) {
        env.lines
            .put(format!("Available commands: {}", self.list_commands().join(", ")));
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.list_commands())
            .finish()
    }
}

/// Split command text into commands (on `;`) and tokens (on single spaces).
///
/// Empty tokens are dropped and commands with no tokens are skipped. Quotes
/// are not special here; `out` regroups quoted tokens itself.
pub fn split_commands(text: &str) -> Vec<Vec<&str>> {
    text.split(';')
        .map(|cmd| cmd.split(' ').filter(|t| !t.is_empty()).collect::<Vec<_>>())
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

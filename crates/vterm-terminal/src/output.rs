//! Output channels: the lines shown above the input line.

use std::borrow::Cow;

use vterm_types::error::Result;

use crate::channel::{ChannelBuffer, ChannelType};
use crate::commands::register_builtins;
use crate::format::FormatArgs;
use crate::interpreter::{CommandRegistry, Environment, split_commands};

/// A buffer of display lines.
#[derive(Debug)]
pub enum OutputChannel {
    /// Stores submitted lines verbatim.
    Plain(ChannelBuffer),
    /// Echoes submitted lines and interprets them as commands.
    Terminal(TerminalOutput),
}

impl Default for OutputChannel {
    fn default() -> Self {
        Self::Plain(ChannelBuffer::new())
    }
}

impl OutputChannel {
    /// An empty plain output channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty terminal output channel with the built-in commands.
    pub fn terminal() -> Self {
        Self::Terminal(TerminalOutput::new())
    }

    fn buffer(&self) -> &ChannelBuffer {
        match self {
            Self::Plain(buffer) => buffer,
            Self::Terminal(t) => &t.lines,
        }
    }

    fn buffer_mut(&mut self) -> &mut ChannelBuffer {
        match self {
            Self::Plain(buffer) => buffer,
            Self::Terminal(t) => &mut t.lines,
        }
    }

    /// Submit a line. Terminal channels skip the first `ignore` characters
    /// (a prompt prefix) when interpreting; plain channels ignore `ignore`.
    pub fn put(&mut self, line: &str, ignore: usize) {
        match self {
            Self::Plain(buffer) => buffer.put(line),
            Self::Terminal(t) => t.put(line, ignore),
        }
    }

    /// Append a line without interpreting it.
    pub fn raw_put(&mut self, line: impl Into<String>) {
        self.buffer_mut().put(line);
    }

    pub fn put_formatted(&mut self, template: &str, args: &FormatArgs<'_>) -> Result<()> {
        self.buffer_mut().put_formatted(template, args)
    }

    pub fn pop(&mut self) -> Result<String> {
        self.buffer_mut().pop()
    }

    pub fn pop_at(&mut self, index: isize) -> Result<String> {
        self.buffer_mut().pop_at(index)
    }

    pub fn clear(&mut self) {
        self.buffer_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Lines as they should be displayed.
    pub fn get(&self) -> Vec<Cow<'_, str>> {
        match self {
            Self::Plain(buffer) => buffer.iter().map(|l| Cow::Borrowed(l.as_str())).collect(),
            Self::Terminal(t) => t.get(),
        }
    }

    pub fn ctype(&self) -> ChannelType {
        match self {
            Self::Plain(_) => ChannelType::OUT,
            Self::Terminal(_) => ChannelType::OUT_CMD,
        }
    }

    pub fn as_terminal(&self) -> Option<&TerminalOutput> {
        match self {
            Self::Plain(_) => None,
            Self::Terminal(t) => Some(t),
        }
    }
}

/// Terminal output: a line buffer driven by a command interpreter.
#[derive(Debug)]
pub struct TerminalOutput {
    lines: ChannelBuffer,
    line_count: bool,
    registry: CommandRegistry,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Empty output with `clear`, `help`, `out` and `lc`.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self::with_registry(registry)
    }

    /// Empty output dispatching through `registry`.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self {
            lines: ChannelBuffer::new(),
            line_count: false,
            registry,
        }
    }

    /// Echo `line`, then run every command in it after skipping `ignore`
    /// characters.
    pub fn put(&mut self, line: &str, ignore: usize) {
        self.lines.put(line);
        let text = skip_chars(line, ignore);
        log::debug!("interpreting {text:?}");
        for tokens in split_commands(text) {
            self.run_command(&tokens);
        }
    }

    /// Dispatch one tokenized command.
    pub fn run_command(&mut self, tokens: &[&str]) {
        let mut env = Environment {
            lines: &mut self.lines,
            line_count: &mut self.line_count,
        };
        self.registry.dispatch(tokens, &mut env);
    }

    /// Raw lines, or `"[i] line"` when line-count mode is on.
    pub fn get(&self) -> Vec<Cow<'_, str>> {
        if self.line_count {
            self.lines
                .iter()
                .enumerate()
                .map(|(i, l)| Cow::Owned(format!("[{i}] {l}")))
                .collect()
        } else {
            self.lines.iter().map(|l| Cow::Borrowed(l.as_str())).collect()
        }
    }

    pub fn line_count(&self) -> bool {
        self.line_count
    }

    pub fn lines(&self) -> &[String] {
        self.lines.as_slice()
    }
}

/// `s` without its first `n` characters.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

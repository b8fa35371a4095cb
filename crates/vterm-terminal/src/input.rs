//! Input channels: the characters typed so far.

use vterm_types::error::Result;

use crate::channel::{ChannelBuffer, ChannelType};
use crate::format::FormatArgs;

/// A buffer of typed characters with an optional prompt head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChannel {
    /// Renders as the concatenated characters.
    Plain(ChannelBuffer),
    /// Renders as head + concatenated characters.
    Terminal(TerminalInput),
}

impl Default for InputChannel {
    fn default() -> Self {
        Self::Plain(ChannelBuffer::new())
    }
}

impl InputChannel {
    /// An empty plain input channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty terminal input channel with the given prompt head.
    pub fn terminal(head: Option<&str>) -> Self {
        Self::Terminal(TerminalInput::new(head))
    }

    fn buffer(&self) -> &ChannelBuffer {
        match self {
            Self::Plain(buffer) => buffer,
            Self::Terminal(t) => &t.buffer,
        }
    }

    fn buffer_mut(&mut self) -> &mut ChannelBuffer {
        match self {
            Self::Plain(buffer) => buffer,
            Self::Terminal(t) => &mut t.buffer,
        }
    }

    pub fn put(&mut self, item: impl Into<String>) {
        self.buffer_mut().put(item);
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

    /// Drop every typed character. The head is kept.
    pub fn clear(&mut self) {
        self.buffer_mut().clear();
    }

    /// Number of buffered entries (the head is not counted).
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// The full input text, head included.
    pub fn get(&self) -> String {
        match self {
            Self::Plain(buffer) => buffer.concat(),
            Self::Terminal(t) => t.get(),
        }
    }

    /// The prompt head; empty for plain channels.
    pub fn head(&self) -> &str {
        match self {
            Self::Plain(_) => "",
            Self::Terminal(t) => t.head(),
        }
    }

    pub fn ctype(&self) -> ChannelType {
        match self {
            Self::Plain(_) => ChannelType::IN,
            Self::Terminal(_) => ChannelType::IN_CMD,
        }
    }

    pub fn as_terminal_mut(&mut self) -> Option<&mut TerminalInput> {
        match self {
            Self::Plain(_) => None,
            Self::Terminal(t) => Some(t),
        }
    }
}

/// Terminal input: typed characters behind a prompt head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalInput {
    buffer: ChannelBuffer,
    head: String,
}

impl TerminalInput {
    pub fn new(head: Option<&str>) -> Self {
        Self {
            buffer: ChannelBuffer::new(),
            head: head.unwrap_or_default().to_string(),
        }
    }

    /// Replace the head. `None` clears it.
    pub fn set_head(&mut self, head: Option<&str>) {
        self.head = head.unwrap_or_default().to_string();
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn get(&self) -> String {
        let mut text = self.head.clone();
        for ch in self.buffer.iter() {
            text.push_str(ch);
        }
        text
    }
}

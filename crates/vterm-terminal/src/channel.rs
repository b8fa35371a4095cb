//! Channel type tags and the shared line/character buffer.

use vterm_types::error::{Result, VtermError};

use crate::format::{FormatArgs, format_template};

/// Low bit marks a command-capable channel.
const CMD_FLAG: u8 = 0x01;

/// Type tag of a channel.
///
/// The high nibble is the direction (`0` none, `1` output, `2` input); bit 0
/// marks a command-capable channel. Subtyping compares directions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelType(u8);

impl ChannelType {
    pub const NAN: Self = Self(0x00);
    pub const OUT: Self = Self(0x10);
    pub const OUT_CMD: Self = Self(0x10 | CMD_FLAG);
    pub const IN: Self = Self(0x20);
    pub const IN_CMD: Self = Self(0x20 | CMD_FLAG);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The direction nibble.
    pub const fn direction(self) -> u8 {
        self.0 >> 4
    }

    pub const fn is_command(self) -> bool {
        self.0 & CMD_FLAG != 0
    }

    /// True when both tags share a direction. The command flag is ignored.
    pub const fn is_subtype_of(self, other: Self) -> bool {
        self.direction() == other.direction()
    }
}

/// See [`ChannelType::is_subtype_of`].
pub const fn is_subtype_of(a: ChannelType, b: ChannelType) -> bool {
    a.is_subtype_of(b)
}

/// Ordered, index-addressable sequence of strings.
///
/// Input channels store one character per entry; output channels store one
/// line per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelBuffer {
    items: Vec<String>,
}

impl ChannelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the end.
    pub fn put(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Append `template` with its placeholders substituted from `args`.
    /// Nothing is appended when substitution fails.
    pub fn put_formatted(&mut self, template: &str, args: &FormatArgs<'_>) -> Result<()> {
        let text = format_template(template, args)?;
        self.items.push(text);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove and return the last entry.
    pub fn pop(&mut self) -> Result<String> {
        self.pop_at(-1)
    }

    /// Remove and return the entry at `index`. Negative indices count back
    /// from the end, so `-1` is the last entry.
    pub fn pop_at(&mut self, index: isize) -> Result<String> {
        let len = self.items.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        match resolved {
            Some(i) if i < len => Ok(self.items.remove(i)),
            _ => Err(VtermError::IndexOutOfRange { index, len }),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Concatenation of every entry.
    pub fn concat(&self) -> String {
        self.items.concat()
    }

    /// Tag of an untyped buffer.
    pub const fn ctype(&self) -> ChannelType {
        ChannelType::NAN
    }
}

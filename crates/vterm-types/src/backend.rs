//! Backend trait definitions.
//!
//! Every platform implements these traits. The terminal model and render
//! driver dispatch all drawing and event polling through them and never call
//! platform-specific APIs.

use crate::error::Result;
use crate::input::InputEvent;

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// Rendering backend trait.
///
/// Coordinates are in pixels with the origin at the top-left corner of the
/// window. Text is drawn with its top-left corner at `(x, y)`.
pub trait RenderBackend {
    /// Prepare the backend for a surface of the given size.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Draw `text` at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Width in pixels `text` would occupy at `font_size`.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Height in pixels of one rendered line at `font_size`.
    fn line_height(&self, font_size: u16) -> u32;

    /// Present the finished frame.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Release backend resources.
    fn shutdown(&mut self) -> Result<()>;
}

/// Input backend trait.
pub trait InputBackend {
    /// Drain all pending events without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn named_colors() {
        assert_eq!(Color::BLACK, Color::rgba(0, 0, 0, 255));
        assert_eq!(Color::WHITE, Color::rgba(255, 255, 255, 255));
    }
}

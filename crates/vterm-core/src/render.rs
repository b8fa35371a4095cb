//! Per-frame drawing of an I/O pair.

use std::time::Duration;

use vterm_terminal::IoPair;
use vterm_types::backend::{Color, RenderBackend};
use vterm_types::config::VtermConfig;
use vterm_types::error::Result;

use crate::cursor::{CursorBlink, CursorPhase};

/// Glyph drawn after the input text.
pub const CURSOR_GLYPH: &str = "_";

/// Draws output lines, the input line and a blinking cursor.
#[derive(Debug, Clone)]
pub struct RenderDriver {
    foreground: Color,
    background: Color,
    font_size: u16,
    blink: CursorBlink,
}

impl RenderDriver {
    pub fn new(foreground: Color, background: Color, font_size: u16, blink: CursorBlink) -> Self {
        Self {
            foreground,
            background,
            font_size,
            blink,
        }
    }

    /// Colors, font size and blink rate from a validated config.
    pub fn from_config(config: &VtermConfig) -> Self {
        Self::new(
            config.foreground_color(),
            config.background_color(),
            config.font_size,
            CursorBlink::new(config.frame_rate, config.blink_delay),
        )
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Draw one frame. Presenting it is left to the caller.
    pub fn render(
        &mut self,
        backend: &mut dyn RenderBackend,
        io: &IoPair,
        dt: Duration,
    ) -> Result<()> {
        log::trace!("frame dt={dt:?}");
        backend.clear(self.background)?;

        let line_height = backend.line_height(self.font_size) as i32;
        let mut y = 0;
        for line in io.output().get() {
            backend.draw_text(&line, 0, y, self.font_size, self.foreground)?;
            y += line_height;
        }

        let input = io.input().get();
        backend.draw_text(&input, 0, y, self.font_size, self.foreground)?;

        let cursor_color = match self.blink.tick() {
            CursorPhase::Visible => self.foreground,
            CursorPhase::Hidden => self.background,
        };
        let x = backend.measure_text(&input, self.font_size) as i32;
        backend.draw_text(CURSOR_GLYPH, x, y, self.font_size, cursor_color)
    }
}

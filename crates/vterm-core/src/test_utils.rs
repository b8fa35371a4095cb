//! Shared test utilities for vterm-core tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion.

use std::collections::VecDeque;

use vterm_types::backend::{Color, InputBackend, RenderBackend};
use vterm_types::bitmap_font::{GLYPH_HEIGHT, GLYPH_WIDTH, scale_for};
use vterm_types::error::Result;
use vterm_types::input::InputEvent;

/// A recorded call from the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
    Swap,
}

/// A mock backend that records all draw calls for test assertions.
///
/// Text metrics follow the built-in bitmap font. Each `poll_events` call
/// returns the next scripted batch, then `Quit` once the script runs out.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    batches: VecDeque<Vec<InputEvent>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one batch of events for a future `poll_events` call.
    pub fn script(&mut self, batch: Vec<InputEvent>) {
        self.batches.push_back(batch);
    }

    /// Return text draw calls as `(text, x, y, color)` tuples in call order.
    pub fn texts(&self) -> Vec<(&str, i32, i32, Color)> {
        self.calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::DrawText {
                    text, x, y, color, ..
                } = c
                {
                    Some((text.as_str(), *x, *y, *color))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Count of `Clear` calls.
    pub fn clear_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear(_)))
            .count()
    }
}

impl RenderBackend for MockBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * GLYPH_WIDTH * scale_for(font_size)
    }

    fn line_height(&self, font_size: u16) -> u32 {
        GLYPH_HEIGHT * scale_for(font_size)
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Swap);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

impl InputBackend for MockBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

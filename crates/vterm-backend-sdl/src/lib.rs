//! SDL2 backend for vterm.
//!
//! Implements `RenderBackend` and `InputBackend` using SDL2. Text is drawn
//! with the built-in 8x8 bitmap font, scaled by whole pixels.

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use vterm_types::backend::{Color, InputBackend, RenderBackend};
use vterm_types::bitmap_font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use vterm_types::error::{Result, VtermError};
use vterm_types::input::{InputEvent, KeyCode};

/// SDL2 rendering and input backend.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a resizable window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| VtermError::Backend(e.to_string()))?;
        let video = sdl
            .video()
            .map_err(|e| VtermError::Backend(e.to_string()))?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| VtermError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| VtermError::Backend(e.to_string()))?;
        let event_pump = sdl
            .event_pump()
            .map_err(|e| VtermError::Backend(e.to_string()))?;
        video.text_input().start();

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self { canvas, event_pump })
    }
}

fn sdl_color(color: Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

impl RenderBackend for SdlBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        log::debug!("SDL2 surface {width}x{height}");
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
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
        let scale = bitmap_font::scale_for(font_size) as i32;
        let glyph_w = GLYPH_WIDTH as i32 * scale;
        self.canvas.set_draw_color(sdl_color(color));

        let mut cx = x;
        for ch in text.chars() {
            let rows = bitmap_font::glyph(ch);
            for (row, bits) in (0i32..).zip(rows.iter()) {
                for col in 0..GLYPH_WIDTH as i32 {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = cx + col * scale;
                    let py = y + row * scale;
                    if scale == 1 {
                        self.canvas
                            .draw_point(Point::new(px, py))
                            .map_err(VtermError::Backend)?;
                    } else {
                        self.canvas
                            .fill_rect(Rect::new(px, py, scale as u32, scale as u32))
                            .map_err(VtermError::Backend)?;
                    }
                }
            }
            cx += glyph_w;
        }
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * GLYPH_WIDTH * bitmap_font::scale_for(font_size)
    }

    fn line_height(&self, font_size: u16) -> u32 {
        GLYPH_HEIGHT * bitmap_font::scale_for(font_size)
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down");
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump.poll_iter().filter_map(map_sdl_event).collect()
    }
}

/// Map an SDL2 event to a vterm input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key_down(key),
        Event::TextInput { text, .. } => Some(InputEvent::text(text)),
        _ => None,
    }
}

/// Printable keys arrive as text input, so only editing keys map here.
fn map_key_down(key: Keycode) -> Option<InputEvent> {
    match key {
        Keycode::Backspace => Some(InputEvent::key(KeyCode::Backspace)),
        Keycode::Return | Keycode::KpEnter => Some(InputEvent::key(KeyCode::Return)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use sdl2::event::WindowEvent;

    use super::*;

    #[test]
    fn editing_keys() {
        assert_eq!(
            map_key_down(Keycode::Backspace),
            Some(InputEvent::key(KeyCode::Backspace))
        );
        assert_eq!(
            map_key_down(Keycode::Return),
            Some(InputEvent::key(KeyCode::Return))
        );
        assert_eq!(
            map_key_down(Keycode::KpEnter),
            Some(InputEvent::key(KeyCode::Return))
        );
        assert_eq!(map_key_down(Keycode::A), None);
    }

    #[test]
    fn quit_and_text() {
        assert_eq!(
            map_sdl_event(Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_sdl_event(Event::TextInput {
                timestamp: 0,
                window_id: 1,
                text: "é".to_string(),
            }),
            Some(InputEvent::text("é"))
        );
    }

    #[test]
    fn window_events_are_dropped() {
        for win_event in [WindowEvent::FocusGained, WindowEvent::FocusLost] {
            assert_eq!(
                map_sdl_event(Event::Window {
                    timestamp: 0,
                    window_id: 1,
                    win_event,
                }),
                None
            );
        }
    }
}

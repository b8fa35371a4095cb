//! Application context: everything the main loop mutates.

use std::time::Duration;

use vterm_terminal::IoPair;
use vterm_types::backend::{InputBackend, RenderBackend};
use vterm_types::config::VtermConfig;
use vterm_types::error::Result;
use vterm_types::input::InputEvent;

use crate::clock::FrameClock;
use crate::keys::{InputResult, handle_key};
use crate::render::RenderDriver;

/// Mutable application state, built once at startup and passed by `&mut`.
#[derive(Debug)]
pub struct AppContext {
    pub config: VtermConfig,
    pub io: IoPair,
    pub render: RenderDriver,
    pub running: bool,
}

impl AppContext {
    /// Validate `config` and build a terminal I/O pair with its prompt.
    pub fn new(config: VtermConfig) -> Result<Self> {
        config.validate()?;
        let io = IoPair::terminal(Some(&config.prompt));
        Ok(Self::with_io(config, io))
    }

    /// Use a caller-built I/O pair. `config` is assumed valid.
    pub fn with_io(config: VtermConfig, io: IoPair) -> Self {
        let render = RenderDriver::from_config(&config);
        Self {
            config,
            io,
            render,
            running: true,
        }
    }

    /// Apply one input event. A quit request stops the loop.
    pub fn handle_event(&mut self, event: &InputEvent) -> InputResult {
        let result = handle_key(event, &mut self.io);
        if result == InputResult::Quit {
            log::info!("quit requested");
            self.running = false;
        }
        result
    }

    /// Draw and present one frame.
    pub fn frame(&mut self, backend: &mut dyn RenderBackend, dt: Duration) -> Result<()> {
        self.render.render(backend, &self.io, dt)?;
        backend.swap_buffers()
    }

    /// Run the tick loop until a quit event arrives.
    ///
    /// Each tick handles every pending event, then draws one frame. A quit
    /// ends the loop once the rest of its batch and that frame are done.
    pub fn run<B: RenderBackend + InputBackend>(&mut self, backend: &mut B) -> Result<()> {
        let mut clock = FrameClock::new(self.config.frame_rate);
        while self.running {
            let dt = clock.tick();
            for event in backend.poll_events() {
                self.handle_event(&event);
            }
            self.frame(backend, dt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vterm_types::input::KeyCode;

    use super::*;
    use crate::render::CURSOR_GLYPH;
    use crate::test_utils::{DrawCall, MockBackend};

    fn fast_config() -> VtermConfig {
        VtermConfig {
            frame_rate: 1000,
            ..VtermConfig::default()
        }
    }

    fn typed(line: &str) -> Vec<InputEvent> {
        let mut events: Vec<_> = line
            .chars()
            .map(|c| InputEvent::text(c.to_string()))
            .collect();
        events.push(InputEvent::key(KeyCode::Return));
        events
    }

    #[test]
    fn new_uses_prompt() {
        let ctx = AppContext::new(VtermConfig::default()).unwrap();
        assert_eq!(ctx.io.input().get(), ">>> ");
        assert!(ctx.running);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = VtermConfig {
            frame_rate: 0,
            ..VtermConfig::default()
        };
        assert!(AppContext::new(config).is_err());
    }

    #[test]
    fn quit_stops_running() {
        let mut ctx = AppContext::new(fast_config()).unwrap();
        assert_eq!(ctx.handle_event(&InputEvent::Quit), InputResult::Quit);
        assert!(!ctx.running);
    }

    #[test]
    fn frame_renders_and_presents() {
        let mut ctx = AppContext::new(fast_config()).unwrap();
        let mut backend = MockBackend::new();
        ctx.frame(&mut backend, Duration::ZERO).unwrap();
        assert_eq!(backend.calls.last(), Some(&DrawCall::Swap));
        assert_eq!(backend.texts()[0].0, ">>> ");
        assert_eq!(backend.texts()[1].0, CURSOR_GLYPH);
    }

    #[test]
    fn run_until_quit() {
        let mut ctx = AppContext::new(fast_config()).unwrap();
        let mut backend = MockBackend::new();
        backend.script(typed("out hello"));
        backend.script(vec![InputEvent::Quit, InputEvent::text("x")]);

        ctx.run(&mut backend).unwrap();

        assert!(!ctx.running);
        assert_eq!(ctx.io.output().get(), [">>> out hello", "hello"]);
        // The batch holding quit is still handled to its end.
        assert_eq!(ctx.io.input().get(), ">>> x");
        let swaps = backend
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Swap))
            .count();
        assert_eq!(swaps, 2);
        assert_eq!(backend.clear_count(), 2);
    }
}

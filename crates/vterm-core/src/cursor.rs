//! Blinking text cursor.

/// Whether the cursor is drawn in the foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPhase {
    Visible,
    Hidden,
}

/// Frame-counted blink state.
///
/// The cursor is hidden for `period` ticks, then visible for `period` ticks.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    period: u32,
    counter: u32,
}

impl CursorBlink {
    /// Blink once every `delay` seconds at `frame_rate` ticks per second.
    pub fn new(frame_rate: u32, delay: f64) -> Self {
        let ticks = (f64::from(frame_rate) * delay).round();
        let period = if ticks.is_finite() && ticks >= 1.0 {
            ticks.min(f64::from(u32::MAX / 2)) as u32
        } else {
            1
        };
        Self { period, counter: 0 }
    }

    /// Ticks spent in each phase.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Advance one frame and return the phase to draw in.
    pub fn tick(&mut self) -> CursorPhase {
        if self.counter >= 2 * self.period {
            self.counter = 0;
        }
        let phase = if self.counter >= self.period {
            CursorPhase::Visible
        } else {
            CursorPhase::Hidden
        };
        self.counter += 1;
        phase
    }
}

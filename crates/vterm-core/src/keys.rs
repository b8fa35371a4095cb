//! Key handling: applies one input event to an I/O pair.

use vterm_terminal::IoPair;
use vterm_types::input::{InputEvent, KeyCode};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Apply `event` to `io`.
///
/// Backspace drops the last typed character, Return submits the input line
/// to the output channel and clears it, and any other key appends the
/// characters it produced.
pub fn handle_key(event: &InputEvent, io: &mut IoPair) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::KeyPress {
            key: KeyCode::Backspace,
            ..
        } => {
            if let Err(e) = io.input_mut().pop() {
                log::debug!("backspace ignored: {e}");
            }
        },
        InputEvent::KeyPress {
            key: KeyCode::Return,
            ..
        } => submit(io),
        InputEvent::KeyPress { text, .. } => {
            let input = io.input_mut();
            for ch in text.chars() {
                input.put(ch);
            }
        },
    }
    InputResult::Continue
}

fn submit(io: &mut IoPair) {
    let (input, output) = io.parts_mut();
    let line = input.get();
    let ignore = input.head().chars().count();
    log::debug!("submit {line:?}");
    output.put(&line, ignore);
    input.clear();
}

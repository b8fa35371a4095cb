//! Backend-agnostic input event types.
//!
//! Every backend maps its native input to these enums. The terminal model
//! never sees raw platform input.

/// A backend-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    ///
    /// `text` holds the characters the key produced and is empty for
    /// non-printable keys.
    KeyPress { key: KeyCode, text: String },
    /// User requested quit (window close, etc.).
    Quit,
}

impl InputEvent {
    /// A key press that produced `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::KeyPress {
            key: KeyCode::Other,
            text: text.into(),
        }
    }

    /// A key press that produced no text.
    pub fn key(key: KeyCode) -> Self {
        Self::KeyPress {
            key,
            text: String::new(),
        }
    }
}

/// Keys the terminal treats specially. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Return,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constructor_uses_other_key() {
        let e = InputEvent::text("a");
        assert_eq!(
            e,
            InputEvent::KeyPress {
                key: KeyCode::Other,
                text: "a".to_string()
            }
        );
    }

    #[test]
    fn key_constructor_has_empty_text() {
        if let InputEvent::KeyPress { key, text } = InputEvent::key(KeyCode::Return) {
            assert_eq!(key, KeyCode::Return);
            assert!(text.is_empty());
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn text_input_unicode() {
        if let InputEvent::KeyPress { text, .. } = InputEvent::text('\u{1F600}') {
            assert_eq!(text, "\u{1F600}");
        }
    }

    #[test]
    fn quit_differs_from_keys() {
        assert_ne!(InputEvent::Quit, InputEvent::key(KeyCode::Other));
    }

    #[test]
    fn key_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(KeyCode::Backspace);
        set.insert(KeyCode::Return);
        set.insert(KeyCode::Backspace);
        assert_eq!(set.len(), 2);
    }
}

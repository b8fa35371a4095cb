//! vterm core.
//!
//! Ties the channel model to the backend traits: key events are applied to
//! an [`IoPair`](terminal::IoPair) by [`keys::handle_key`] and frames are
//! drawn by [`render::RenderDriver`]. This crate has zero platform
//! dependencies.

// Re-exports from vterm-types (foundation types and traits).
pub use vterm_types::backend;
pub use vterm_types::bitmap_font;
pub use vterm_types::color;
pub use vterm_types::config;
pub use vterm_types::error;
pub use vterm_types::input;

pub mod app;
pub mod clock;
pub mod cursor;
pub mod keys;
pub mod render;
pub use vterm_terminal as terminal;

#[cfg(test)]
pub(crate) mod test_utils;

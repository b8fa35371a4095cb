//! Foundation types and traits for vterm.
//!
//! This crate contains the backend-agnostic types shared by all vterm crates:
//! colors, input events, backend trait definitions, the built-in bitmap font,
//! configuration, and error types.

pub mod backend;
pub mod bitmap_font;
pub mod color;
pub mod config;
pub mod error;
pub mod input;

//! Startup configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields a usable configuration. Values are fixed for the process lifetime.

use std::path::Path;

use serde::Deserialize;

use crate::backend::Color;
use crate::bitmap_font::GLYPH_HEIGHT;
use crate::color::parse_hex_color;
use crate::error::{Result, VtermError};

/// Window, timing, color and prompt settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VtermConfig {
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Target ticks per second.
    pub frame_rate: u32,
    /// Half-period of the cursor blink, in seconds.
    pub blink_delay: f64,
    /// Text color as `#RRGGBB` or `#RRGGBBAA`.
    pub foreground: String,
    /// Background color as `#RRGGBB` or `#RRGGBBAA`.
    pub background: String,
    pub font_size: u16,
    /// Prompt shown in front of the input line.
    pub prompt: String,
}

impl Default for VtermConfig {
    fn default() -> Self {
        Self {
            window_title: "Virtual Terminal".to_string(),
            screen_width: 500,
            screen_height: 500,
            frame_rate: 60,
            blink_delay: 0.5,
            foreground: "#FFFFFF".to_string(),
            background: "#000000".to_string(),
            font_size: 16,
            prompt: ">>> ".to_string(),
        }
    }
}

impl VtermConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges and color syntax.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(VtermError::Config(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.frame_rate == 0 {
            return Err(VtermError::Config("frame_rate must be positive".into()));
        }
        if !self.blink_delay.is_finite() || self.blink_delay <= 0.0 {
            return Err(VtermError::Config(format!(
                "blink_delay must be a positive number of seconds, got {}",
                self.blink_delay
            )));
        }
        if u32::from(self.font_size) < GLYPH_HEIGHT {
            return Err(VtermError::Config(format!(
                "font_size must be at least {GLYPH_HEIGHT}, got {}",
                self.font_size
            )));
        }
        if u32::from(self.font_size) % GLYPH_HEIGHT != 0 {
            log::warn!(
                "font_size {} is not a multiple of {GLYPH_HEIGHT}; glyphs are scaled down to the nearest multiple",
                self.font_size
            );
        }
        for (key, value) in [
            ("foreground", &self.foreground),
            ("background", &self.background),
        ] {
            if parse_hex_color(value).is_none() {
                return Err(VtermError::Config(format!(
                    "{key} must be #RRGGBB or #RRGGBBAA, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Parsed foreground color. Falls back to white.
    pub fn foreground_color(&self) -> Color {
        parse_hex_color(&self.foreground).unwrap_or(Color::WHITE)
    }

    /// Parsed background color. Falls back to black.
    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background).unwrap_or(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let c = VtermConfig::default();
        assert_eq!(c.frame_rate, 60);
        assert_eq!(c.blink_delay, 0.5);
        assert_eq!(c.foreground_color(), Color::WHITE);
        assert_eq!(c.background_color(), Color::BLACK);
        assert_eq!(c.prompt, ">>> ");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let c = VtermConfig::from_toml_str("").unwrap();
        assert_eq!(c, VtermConfig::default());
    }

    #[test]
    fn partial_document_overrides() {
        let c = VtermConfig::from_toml_str(
            r##"
            frame_rate = 30
            foreground = "#00FF00"
            prompt = "$ "
            "##,
        )
        .unwrap();
        assert_eq!(c.frame_rate, 30);
        assert_eq!(c.foreground_color(), Color::rgb(0, 255, 0));
        assert_eq!(c.prompt, "$ ");
        assert_eq!(c.screen_width, 500);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = VtermConfig::from_toml_str("fps = 60").unwrap_err();
        assert!(matches!(err, VtermError::TomlParse(_)));
    }

    #[test]
    fn zero_frame_rate_rejected() {
        let err = VtermConfig::from_toml_str("frame_rate = 0").unwrap_err();
        assert!(matches!(err, VtermError::Config(_)));
    }

    #[test]
    fn negative_blink_delay_rejected() {
        let err = VtermConfig::from_toml_str("blink_delay = -1.0").unwrap_err();
        assert!(format!("{err}").contains("blink_delay"));
    }

    #[test]
    fn small_font_rejected() {
        let err = VtermConfig::from_toml_str("font_size = 4").unwrap_err();
        assert!(format!("{err}").contains("font_size"));
    }

    #[test]
    fn bad_color_rejected() {
        let err = VtermConfig::from_toml_str(r#"background = "black""#).unwrap_err();
        assert!(format!("{err}").contains("background"));
    }

    #[test]
    fn zero_width_rejected() {
        let err = VtermConfig::from_toml_str("screen_width = 0").unwrap_err();
        assert!(matches!(err, VtermError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window_title = \"test\"\nfont_size = 24").unwrap();
        let c = VtermConfig::load(file.path()).unwrap();
        assert_eq!(c.window_title, "test");
        assert_eq!(c.font_size, 24);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VtermConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, VtermError::Io(_)));
    }
}

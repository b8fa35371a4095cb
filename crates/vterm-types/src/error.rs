//! Error types for vterm.

use std::io;

/// Errors produced by the vterm framework.
///
/// The first group is raised by the channel model and rendered back to the
/// user as output lines; the second group covers startup and backend failures.
#[derive(Debug, thiserror::Error)]
pub enum VtermError {
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Bad quote")]
    Quote,

    #[error("Bad arguments ({0})")]
    BadArguments(String),

    #[error("format error: {0}")]
    Format(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VtermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_display() {
        let e = VtermError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(format!("{e}"), "index 4 out of range for 2 entries");
    }

    #[test]
    fn negative_index_display() {
        let e = VtermError::IndexOutOfRange { index: -1, len: 0 };
        assert_eq!(format!("{e}"), "index -1 out of range for 0 entries");
    }

    #[test]
    fn quote_error_display() {
        assert_eq!(format!("{}", VtermError::Quote), "Bad quote");
    }

    #[test]
    fn bad_arguments_display() {
        let e = VtermError::BadArguments("too many args".into());
        assert_eq!(format!("{e}"), "Bad arguments (too many args)");
    }

    #[test]
    fn format_error_display() {
        let e = VtermError::Format("missing argument 2".into());
        assert_eq!(format!("{e}"), "format error: missing argument 2");
    }

    #[test]
    fn backend_error_display() {
        let e = VtermError::Backend("init failed".into());
        assert_eq!(format!("{e}"), "backend error: init failed");
    }

    #[test]
    fn config_error_display() {
        let e = VtermError::Config("frame_rate must be positive".into());
        assert_eq!(format!("{e}"), "config error: frame_rate must be positive");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: VtermError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: VtermError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(VtermError::Quote);
        assert!(r.is_err());
    }
}

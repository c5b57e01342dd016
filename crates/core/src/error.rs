//! Error types for the langcolors core.

use thiserror::Error;

/// Errors produced while parsing a color value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value is not of the form `#RRGGBB` (wrong length or missing `#`).
    #[error("expected hex color of form #RRGGBB, got {0:?}")]
    InvalidFormat(String),

    /// The digits after `#` are not valid hexadecimal.
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_value() {
        let err = ColorError::InvalidFormat("FF0000".into());
        let msg = format!("{err}");
        assert!(msg.contains("FF0000"), "missing value in: {msg}");
        assert!(msg.contains("#RRGGBB"), "missing expected form in: {msg}");
    }

    #[test]
    fn invalid_hex_includes_value() {
        let err = ColorError::InvalidHex("#GG0000".into());
        let msg = format!("{err}");
        assert!(msg.contains("#GG0000"), "missing value in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}

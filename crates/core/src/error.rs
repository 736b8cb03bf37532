//! Error types for the hueshift core.
//!
//! Conversions never fail; only parsing colors and color kinds from text does.

use thiserror::Error;

/// Errors produced when reading colors or color kinds from text.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color kind name was not recognized.
    #[error("unknown color kind: {0}")]
    UnknownKind(String),

    /// The number of channels did not fit the color kind.
    #[error("invalid channel count for {kind}: expected {expected}, got {got}")]
    InvalidChannels {
        kind: String,
        expected: String,
        got: usize,
    },

    /// A channel could not be parsed as a number of the right type.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// A hex color string was malformed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_includes_name() {
        let err = ColorError::UnknownKind("lab".into());
        let msg = format!("{err}");
        assert!(msg.contains("lab"), "missing kind name in: {msg}");
    }

    #[test]
    fn invalid_channels_includes_all_fields() {
        let err = ColorError::InvalidChannels {
            kind: "cmyk".into(),
            expected: "4 or 5".into(),
            got: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("cmyk"), "missing kind in: {msg}");
        assert!(msg.contains("4 or 5"), "missing expected count in: {msg}");
        assert!(msg.contains('2'), "missing actual count in: {msg}");
    }

    #[test]
    fn invalid_number_includes_message() {
        let err = ColorError::InvalidNumber("'abc'".into());
        let msg = format!("{err}");
        assert!(msg.contains("abc"), "missing message in: {msg}");
    }

    #[test]
    fn invalid_hex_includes_message() {
        let err = ColorError::InvalidHex("expected 6 or 8 hex digits".into());
        let msg = format!("{err}");
        assert!(msg.contains("hex digits"), "missing message in: {msg}");
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

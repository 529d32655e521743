//! Error types for serial code operations.

use thiserror::Error;

/// Errors that can occur while generating, parsing or verifying serial codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    /// Input string is empty
    #[error("Serial code is empty")]
    Empty,

    /// Code has fewer than one payload group plus a checksum
    #[error("Invalid segment count: expected at least 2, got {found}")]
    SegmentCount { found: usize },

    /// Two delimiters in a row, or a leading/trailing delimiter
    #[error("Segment {index} is empty")]
    EmptySegment { index: usize },

    /// Payload character outside A-Z / 0-9
    #[error("Invalid payload character {ch:?} at position {index}")]
    InvalidPayloadChar { ch: char, index: usize },

    /// Checksum character outside the restricted alphabet
    #[error("Invalid checksum character {ch:?} at position {index}")]
    InvalidChecksumChar { ch: char, index: usize },

    /// Code is well formed but does not have the configured layout
    #[error("Layout mismatch: expected groups {expected:?}, got {got:?}")]
    LayoutMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// Checksum requested over zero payload groups
    #[error("Payload is empty")]
    EmptyPayload,

    /// Checksum length must be at least one
    #[error("Checksum length must be positive")]
    ZeroChecksumLength,

    /// Configured lengths are unusable
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Secret key has no bytes
    #[error("Secret key is empty")]
    EmptyKey,

    /// The operating system random source failed
    #[error("Secure random source unavailable: {0}")]
    Entropy(String),
}

impl CodeError {
    /// True for errors caused by a malformed user-supplied code string.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CodeError::Empty
                | CodeError::SegmentCount { .. }
                | CodeError::EmptySegment { .. }
                | CodeError::InvalidPayloadChar { .. }
                | CodeError::InvalidChecksumChar { .. }
                | CodeError::LayoutMismatch { .. }
        )
    }
}

/// Result type alias for serial code operations.
pub type Result<T> = std::result::Result<T, CodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_distinguished() {
        assert!(CodeError::Empty.is_input_error());
        assert!(CodeError::SegmentCount { found: 1 }.is_input_error());
        assert!(!CodeError::EmptyPayload.is_input_error());
        assert!(!CodeError::Entropy("gone".into()).is_input_error());
    }

    #[test]
    fn test_messages() {
        let err = CodeError::InvalidChecksumChar { ch: 'O', index: 2 };
        assert_eq!(err.to_string(), "Invalid checksum character 'O' at position 2");
        assert_eq!(
            CodeError::SegmentCount { found: 1 }.to_string(),
            "Invalid segment count: expected at least 2, got 1"
        );
    }
}

//! Error types for the rendering engine.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can surface from a render request.
///
/// The signal chain itself is infallible: short buffers, zero-length input,
/// and feedback settling are all defined as silence-padding, not failures.
/// The variants here cover the orchestrator boundary.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Unknown effect identifier. Caller bug; no partial work is performed.
    #[error("invalid effect: {name:?}")]
    InvalidEffect {
        /// The unrecognized identifier.
        name: String,
    },

    /// The capture/decode collaborator could not produce a sample buffer.
    #[error("decode failure: {message}")]
    DecodeFailure {
        /// Description from the decode boundary.
        message: String,
    },

    /// Unrecoverable numeric state (e.g. a non-finite sample rate).
    #[error("render failure: {message}")]
    RenderFailure {
        /// Error message.
        message: String,
    },
}

impl RenderError {
    /// Creates an invalid-effect error.
    pub fn invalid_effect(name: impl Into<String>) -> Self {
        Self::InvalidEffect { name: name.into() }
    }

    /// Creates a decode-failure error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeFailure {
            message: message.into(),
        }
    }

    /// Creates a render-failure error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::RenderFailure {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_effect_display() {
        let err = RenderError::invalid_effect("whisper");
        assert!(err.to_string().contains("whisper"));
    }

    #[test]
    fn test_decode_display() {
        let err = RenderError::decode("truncated capture");
        assert!(err.to_string().contains("truncated capture"));
    }
}

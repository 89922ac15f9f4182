use thiserror::Error;

/// Errors produced by the codec, the pattern decoder and the renderer.
///
/// None of these are retried inside the crate; the caller decides whether to
/// re-prompt the capture surface or give up.
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not the expected number of ASCII digits, or is empty.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// Embedded check digit disagrees with the computed one (strict policy only).
    #[error("check digit mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Check digit computed from the payload
        expected: u8,
        /// Check digit carried by the value
        found: u8,
    },

    /// A module pattern could not be decoded back into digits.
    #[error("invalid module pattern at position {position}: {reason}")]
    InvalidPattern {
        /// Module index where decoding failed
        position: usize,
        /// What was found there
        reason: String,
    },

    /// Rendering geometry would produce an empty or negative raster.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Which dimension is out of range
        reason: String,
    },

    /// Image encoding failure while writing a raster to disk.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_pattern(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            position,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the candidate string itself, which a capture
    /// surface should answer by asking for a new scan.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::ChecksumMismatch { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::invalid_input("expected 13 digits, got 5");
        assert_eq!(err.to_string(), "invalid input: expected 13 digits, got 5");

        let err = Error::ChecksumMismatch {
            expected: 1,
            found: 2,
        };
        assert_eq!(err.to_string(), "check digit mismatch: expected 1, found 2");

        let err = Error::invalid_pattern(11, "missing start guard");
        assert_eq!(
            err.to_string(),
            "invalid module pattern at position 11: missing start guard"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(Error::invalid_input("x").is_rejection());
        assert!(
            Error::ChecksumMismatch {
                expected: 0,
                found: 9
            }
            .is_rejection()
        );
        assert!(!Error::invalid_geometry("zero width").is_rejection());
    }
}

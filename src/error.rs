//! Error types shared by every inspection operation.
//!
//! All failures are surfaced synchronously from the operation that detects
//! them. The core never substitutes defaults for a failed lookup and never
//! converts a detection failure into a passing record.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Failure modes of the inspection core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InspectError {
    /// No boundary above the minimum-area threshold was found in the frame.
    #[error("no object detected in the frame")]
    ObjectNotDetected,

    /// A calibration reference dimension was zero or negative.
    #[error("invalid calibration reference: width={width}, height={height} (both must be > 0)")]
    InvalidReference { width: f64, height: f64 },

    /// Product code missing from the catalog.
    #[error("unknown product code: {code}")]
    UnknownProductCode { code: String },

    /// Color standard code missing from the catalog.
    #[error("unknown color code: {code}")]
    UnknownColorCode { code: String },

    /// The pixel grid is empty or inconsistent with its declared layout.
    #[error("invalid image: {reason}")]
    InvalidImage { reason: String },
}

impl InspectError {
    pub fn invalid_image(reason: impl Into<String>) -> Self {
        Self::InvalidImage {
            reason: reason.into(),
        }
    }

    pub fn unknown_product(code: impl Into<String>) -> Self {
        Self::UnknownProductCode { code: code.into() }
    }

    pub fn unknown_color(code: impl Into<String>) -> Self {
        Self::UnknownColorCode { code: code.into() }
    }

    /// True for failures that a caller can typically resolve by retrying
    /// with a better frame rather than by fixing its own inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ObjectNotDetected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_input() {
        let err = InspectError::unknown_product("XYZ-000");
        assert_eq!(err.to_string(), "unknown product code: XYZ-000");

        let err = InspectError::InvalidReference {
            width: -1.0,
            height: 53.98,
        };
        assert!(err.to_string().contains("width=-1"));
    }

    #[test]
    fn only_detection_failures_are_retryable() {
        assert!(InspectError::ObjectNotDetected.is_retryable());
        assert!(!InspectError::unknown_color("MAUVE").is_retryable());
        assert!(!InspectError::invalid_image("empty").is_retryable());
    }
}

//! Observation error types
//!
//! Errors raised when a raw journal value cannot become an `Observation`.
//! The analytics engine itself never fails; these only occur at the loading boundary.

use thiserror::Error;

/// Errors that can occur while building an observation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObservationError {
    /// Mood score outside the 0-10 scale (or not a number)
    #[error("Invalid mood score: {0} (expected 0-10)")]
    InvalidMood(f64),

    /// Time-of-day label not in {morning, afternoon, evening, night}
    #[error("Unknown time of day: {0}")]
    UnknownTimeOfDay(String),
}

/// Result type alias for observation construction
pub type ObservationResult<T> = Result<T, ObservationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ObservationError::InvalidMood(11.0);
        assert_eq!(err.to_string(), "Invalid mood score: 11 (expected 0-10)");

        let err = ObservationError::UnknownTimeOfDay("noon".to_string());
        assert_eq!(err.to_string(), "Unknown time of day: noon");
    }
}

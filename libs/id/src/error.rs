//! Error types for resource ID parsing.

use thiserror::Error;

/// Errors that can occur when parsing resource IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID does not start with a slash.
    #[error("resource ID must start with '/'")]
    NotRooted,

    /// A required path segment (or its value) is missing.
    #[error("resource ID missing segment '{0}'")]
    MissingSegment(&'static str),

    /// A path segment name did not match.
    #[error("unexpected segment: expected '{expected}', got '{actual}'")]
    UnexpectedSegment {
        expected: &'static str,
        actual: String,
    },

    /// The ID continues past its last expected segment.
    #[error("resource ID has trailing segments: '{0}'")]
    TrailingSegments(String),

    /// A segment value is empty or contains a path separator.
    #[error("invalid value for segment '{segment}': '{value}'")]
    InvalidSegmentValue {
        segment: &'static str,
        value: String,
    },

    /// The VM instance ID is not a non-negative integer.
    #[error("invalid VM instance ID: {0}")]
    InvalidInstanceId(String),
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a structural path problem.
    pub fn is_segment_error(&self) -> bool {
        matches!(
            self,
            IdError::MissingSegment(_)
                | IdError::UnexpectedSegment { .. }
                | IdError::TrailingSegments(_)
                | IdError::InvalidSegmentValue { .. }
        )
    }
}

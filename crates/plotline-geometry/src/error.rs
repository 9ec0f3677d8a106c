//! Error types for geometry generation.

use std::fmt;

/// Errors that can occur while building plot geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The caller broke an input contract (too few points, negative width, ...).
    InvalidInput {
        /// Description of the violated contract.
        reason: String,
    },

    /// A join had a zero-length direction and the stroke rejects degenerate joins.
    DegenerateSegment {
        /// Index of the polyline point whose direction collapsed.
        index: usize,
    },
}

impl GeometryError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        GeometryError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether this is an [`GeometryError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GeometryError::InvalidInput { .. })
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidInput { reason } => {
                write!(f, "Invalid input: {}", reason)
            }
            GeometryError::DegenerateSegment { index } => {
                write!(f, "Degenerate segment at point {}", index)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GeometryError::invalid_input("need at least 2 points, got 1");
        assert_eq!(err.to_string(), "Invalid input: need at least 2 points, got 1");
        assert!(err.is_invalid_input());

        let err = GeometryError::DegenerateSegment { index: 3 };
        assert_eq!(err.to_string(), "Degenerate segment at point 3");
        assert!(!err.is_invalid_input());
    }
}

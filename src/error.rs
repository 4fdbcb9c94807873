//! Error types for counter construction and merging.

use std::fmt;

/// Errors returned by fallible counter operations.
///
/// Estimation itself is infallible; only constructing a counter with an
/// unsupported precision and merging counters of different precisions can
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Precision outside the supported `[4, 18]` range.
    InvalidPrecision(u8),
    /// Merge of two counters built with different precisions.
    PrecisionMismatch {
        /// Precision of the receiving counter.
        lhs: u8,
        /// Precision of the argument counter.
        rhs: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPrecision(p) => write!(
                f,
                "precision (number of registers = 2^precision) must be between 4 and 18, got {p}"
            ),
            Error::PrecisionMismatch { lhs, rhs } => {
                write!(f, "precisions must be equal for merge, got {lhs} and {rhs}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidPrecision(3).to_string(),
            "precision (number of registers = 2^precision) must be between 4 and 18, got 3"
        );
        assert_eq!(
            Error::PrecisionMismatch { lhs: 12, rhs: 14 }.to_string(),
            "precisions must be equal for merge, got 12 and 14"
        );
    }
}

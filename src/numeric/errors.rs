// ============================================================================
// Numeric Errors
// ============================================================================

use std::fmt;

/// Errors produced when converting decimal text into the fixed-point
/// price representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value does not fit in the i64 minor-unit range
    Overflow,
    /// Input could not be parsed as a decimal number
    InvalidInput,
    /// Input carries more decimal places than the price scale keeps
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => write!(f, "value out of price range"),
            NumericError::InvalidInput => write!(f, "invalid decimal input"),
            NumericError::PrecisionLoss => {
                write!(f, "input has more decimal places than the price scale")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::Overflow.to_string(), "value out of price range");
        assert_eq!(NumericError::InvalidInput.to_string(), "invalid decimal input");
    }
}

// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during big-float arithmetic operations.
///
/// Given the structure of the series computation these conditions indicate
/// programming defects rather than recoverable runtime states; the CLI shell
/// treats them as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by a zero denominator
    DivisionByZero,
    /// Operands carry different bit precisions
    ScaleMismatch,
    /// Square root of a negative value
    NegativeSquareRoot,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ScaleMismatch => {
                write!(f, "precision mismatch between operands")
            },
            NumericError::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

// ============================================================================
// Numeric Errors
// Error types shared by every helper in the crate
// ============================================================================

use std::fmt;

/// Errors that can occur when a helper rejects its input.
///
/// Numeric ceilings (factorial, lcm, ...) are NOT reported here unless the
/// caller explicitly asks for a `checked_*` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand signs or bounds do not match what the routine accepts
    InvalidArgument,
    /// A reduction was asked to fold zero elements
    EmptyInput,
    /// The operation is mathematically undefined for this input
    Domain,
    /// A modulus, divisor or denominator was zero
    DivisionByZero,
    /// A lookup was attempted on an empty collection
    EmptyCollection,
    /// Result does not fit the return type (checked variants only)
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument => {
                write!(f, "invalid argument: operands outside the accepted range")
            },
            NumericError::EmptyInput => write!(f, "empty input: nothing to reduce"),
            NumericError::Domain => {
                write!(f, "domain error: operation undefined for this input")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::EmptyCollection => write!(f, "empty collection: no element to index"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::EmptyInput.to_string(),
            "empty input: nothing to reduce"
        );
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Domain, NumericError::Domain);
        assert_ne!(NumericError::EmptyInput, NumericError::EmptyCollection);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::InvalidArgument);
        assert!(err.to_string().starts_with("invalid argument"));
    }
}

//! Error types for polynomial construction and arithmetic.

use thiserror::Error;

/// Errors raised by the arithmetic engine and its configuration.
///
/// Parsing never fails: unrecognised input contributes nothing to the
/// resulting polynomial.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// The divisor of a long division was the zero polynomial.
    #[error("division by the zero polynomial")]
    DivideByZero,

    /// An operand could not be turned into a polynomial.
    #[error("malformed parameter: {0}")]
    MalformedParameter(String),

    /// The snap policy was rejected or installed twice.
    #[error("invalid snap policy: {0}")]
    InvalidPolicy(String),
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;

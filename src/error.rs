//! Error types for interpolation and its input handling.

use thiserror::Error;

/// Errors that can occur while reading points, interpolating, or evaluating.
#[derive(Debug, Error)]
pub enum InterpolationError {
    /// Required sample count below one
    #[error("Invalid configuration: k must be >= 1, got {k}")]
    InvalidConfiguration { k: i64 },

    /// Not enough distinct x values to determine the polynomial
    #[error("Not enough distinct x to interpolate: need {required}, have {available}")]
    InsufficientPoints { required: usize, available: usize },

    /// Zero denominator in a rational construction or division
    #[error("Division by zero")]
    DivisionByZero,

    /// Evaluation produced a fraction where an integer was required
    #[error("Evaluation not integer at x={x}: {value}")]
    NonIntegerEvaluation { x: i64, value: String },

    /// The input document is not valid JSON or has the wrong shape
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The input document has no `keys` section
    #[error("Missing `keys` object with `n` and `k`")]
    MissingKeys,

    /// A point key that is not an integer
    #[error("Invalid point key {key:?}: {message}")]
    InvalidKey { key: String, message: String },

    /// Numeral base outside 2..=36
    #[error("Unsupported base {base} for point x={x}")]
    UnsupportedBase { x: i64, base: String },

    /// Digit string not valid in its base
    #[error("Invalid digits {digits:?} in base {base} for point x={x}")]
    InvalidDigits { x: i64, base: u32, digits: String },
}

pub type Result<T> = std::result::Result<T, InterpolationError>;

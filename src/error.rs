//! Error type shared by the evaluator drivers.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors produced while reading parameters or writing results.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Input ended before a parameter count could be read.
    #[error("missing parameter count on first input line")]
    MissingCount,
    /// First input line did not hold an unsigned integer.
    #[error("invalid parameter count {count:?}")]
    InvalidCount {
        /// Offending first line, trimmed.
        count: String,
        /// Parse failure reported by the standard library.
        source: ParseIntError,
    },
    /// A parameter token was not a valid floating point number.
    #[error("invalid parameter token {token:?}")]
    InvalidToken {
        /// Offending token.
        token: String,
        /// Parse failure reported by the standard library.
        source: ParseFloatError,
    },
    /// Declared parameter count does not match the tokens supplied.
    #[error("expected {declared} parameters, found {found}")]
    CountMismatch {
        /// Count declared on the first input line.
        declared: usize,
        /// Number of parameter tokens actually supplied.
        found: usize,
    },
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type with [`EvalError`] as error.
pub type Result<T> = std::result::Result<T, EvalError>;

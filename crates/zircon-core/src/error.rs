//! Error types for zircon trace-element analysis
//!
//! Provides a unified error type for all zircon-trace crates.

use thiserror::Error;

/// Core error type for zircon statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a tail mass outside (0, 0.5)
    pub fn invalid_tail_mass(t: f64) -> Self {
        Self::InvalidParameter(format!("Tail mass {t} must be in (0, 0.5)"))
    }
}

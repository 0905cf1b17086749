//! Error types for robust statistical analysis
//!
//! Provides a unified error type for all s5p-stats crates.

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for a reduction axis that does not exist
    pub fn invalid_axis(axis: usize, ndim: usize) -> Self {
        Self::InvalidParameter(format!(
            "Axis {axis} is out of bounds for an array of dimension {ndim}"
        ))
    }

    /// Create an error for an invalid percentile
    pub fn invalid_percentile(q: f64) -> Self {
        Self::InvalidParameter(format!("Percentile {q} must be in [0, 100]"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}

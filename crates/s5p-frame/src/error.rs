//! Error types for s5p-frame

use thiserror::Error;

/// Errors raised while preparing frame figures
#[derive(Error, Debug)]
pub enum Error {
    /// Failure inside a shared estimator or sample utility
    #[error("Robust core error: {0}")]
    RobustCore(#[from] robust_core::Error),

    /// Arrays that cannot be joined or reshaped
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Data unusable for the requested figure
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using the frame error
pub type Result<T> = std::result::Result<T, Error>;

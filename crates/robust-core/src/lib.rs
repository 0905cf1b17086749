//! Core traits and types for robust statistical analysis
//!
//! This crate provides the pieces every robust estimator in the workspace
//! shares: a single error type, the [`Numeric`] input trait that lets
//! instrument data of any primitive type flow into `f64` arithmetic, the
//! estimator traits, and NaN-aware sample utilities.
//!
//! # Missing data
//!
//! Instrument products mark missing measurements with fill values that are
//! mapped to NaN before any statistic is computed. All helpers in [`utils`]
//! therefore treat non-finite values as absent rather than as numbers.
//!
//! # Example
//!
//! ```rust
//! use robust_core::utils::{nan_median, nan_percentile};
//!
//! let frame = [3.0, f64::NAN, 1.0, 2.0, 4.0];
//! assert_eq!(nan_median(&frame), 2.5);
//! assert_eq!(nan_percentile(&frame, 50.0).unwrap(), 2.5);
//! ```

pub mod error;
pub mod numeric;
pub mod traits;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
pub use traits::{EstimatorProperties, RobustEstimator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{EstimatorProperties, Numeric, Result, RobustEstimator};
}

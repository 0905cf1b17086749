//! Core traits for robust statistical estimation
//!
//! Algorithm-specific estimators live in their own crates and implement
//! these traits so callers can treat them uniformly.

use crate::{Numeric, Result};

/// Core trait for robust estimators
///
/// An estimator computes a statistic from a sample without modifying it.
/// Non-finite values in the sample are treated as missing data.
pub trait RobustEstimator<T: Numeric = f64> {
    /// Output type of the estimator
    type Output;

    /// Estimate the statistic from the given sample
    fn estimate(&self, sample: &[T]) -> Result<Self::Output>;
}

/// Intrinsic properties of an estimator
pub trait EstimatorProperties {
    /// Human-readable name of the estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// The breakdown point (fraction of contamination the estimator can handle)
    /// - 0.0 for non-robust estimators (e.g., mean)
    /// - 0.5 for maximally robust estimators (e.g., median)
    fn breakdown_point(&self) -> f64;
}

//! Core traits for histogram building

use crate::types::Histogram;
use robust_core::{Numeric, Result};

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    ///
    /// Non-finite values are counted as missing, never binned.
    fn build<T: Numeric>(&self, sample: &[T]) -> Result<Histogram>;
}

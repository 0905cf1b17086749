//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::Histogram;
use robust_core::{Error, Numeric, Result};

/// Fixed-range histogram builder
///
/// Splits `[lo, hi]` into `bins` equal-width bins. Every bin is half-open
/// except the last, which also holds `hi`. Finite values outside the range
/// are counted as `outside`, non-finite values as `missing`.
///
/// A degenerate range (`lo == hi`) is widened to `[lo - 0.5, hi + 0.5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRangeBuilder {
    edges: Vec<f64>,
}

impl FixedRangeBuilder {
    /// Create a builder with `bins` bins spanning `[lo, hi]`
    pub fn new(bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidParameter(
                "histogram requires at least one bin".to_string(),
            ));
        }
        if !lo.is_finite() || !hi.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{lo}, {hi}] is not finite"
            )));
        }
        if lo > hi {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{lo}, {hi}] is inverted"
            )));
        }

        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let step = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * step).collect();
        edges.push(hi);

        Ok(Self { edges })
    }

    /// Bin edges, `bins + 1` values
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    fn bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Index of the bin holding `x`, `None` when `x` is out of range
    fn bin_index(&self, x: f64) -> Option<usize> {
        let n = self.bins();
        let lo = self.edges[0];
        let hi = self.edges[n];
        if x < lo || x > hi {
            return None;
        }
        let mut index = (((x - lo) / (hi - lo)) * n as f64) as usize;
        if index >= n {
            index = n - 1;
        }
        // Rounding can land one bin off the computed edges
        if index > 0 && x < self.edges[index] {
            index -= 1;
        } else if index + 1 < n && x >= self.edges[index + 1] {
            index += 1;
        }
        Some(index)
    }
}

impl HistogramBuilder for FixedRangeBuilder {
    fn build<T: Numeric>(&self, sample: &[T]) -> Result<Histogram> {
        let mut counts = vec![0usize; self.bins()];
        let mut outside = 0;
        let mut missing = 0;

        for value in sample {
            if !value.is_finite_value() {
                missing += 1;
                continue;
            }
            match self.bin_index(value.to_f64()) {
                Some(i) => counts[i] += 1,
                None => outside += 1,
            }
        }

        Ok(Histogram::from_counts(self.edges.clone(), counts, outside, missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_fixed_range_counts() {
        let builder = FixedRangeBuilder::new(4, 0.0, 4.0).unwrap();
        let hist = builder.build(&[0.0, 0.5, 1.0, 2.5, 3.9, 4.0, 4.1, -0.1]).unwrap();
        assert_eq!(hist.counts(), vec![2, 1, 1, 2]);
        assert_eq!(hist.total_count(), 6);
        assert_eq!(hist.outside(), 2);
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let builder = FixedRangeBuilder::new(2, -1.0, 1.0).unwrap();
        let hist = builder
            .build(&[f64::NAN, -0.5, f64::INFINITY, 0.5, f64::NEG_INFINITY])
            .unwrap();
        assert_eq!(hist.counts(), vec![1, 1]);
        assert_eq!(hist.missing(), 3);
        assert_eq!(hist.outside(), 0);
    }

    #[test]
    fn test_degenerate_range_is_widened() {
        let builder = FixedRangeBuilder::new(1, 2.0, 2.0).unwrap();
        assert_eq!(builder.edges(), &[1.5, 2.5]);
        let hist = builder.build(&[2.0, 2.0]).unwrap();
        assert_eq!(hist.counts(), vec![2]);
        assert_relative_eq!(hist.bins()[0].density, 1.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(FixedRangeBuilder::new(0, 0.0, 1.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(FixedRangeBuilder::new(3, 1.0, 0.0), Err(Error::InvalidParameter(_))));
        assert!(matches!(
            FixedRangeBuilder::new(3, f64::NAN, 1.0),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let data: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin()).collect();
        let hist = FixedRangeBuilder::new(15, -1.0, 1.0).unwrap().build(&data).unwrap();
        let area: f64 = hist.bins().iter().map(|b| b.density * b.width()).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_integer_samples() {
        let builder = FixedRangeBuilder::new(3, 0.0, 3.0).unwrap();
        let hist = builder.build(&[0u16, 1, 1, 2, 3, 9]).unwrap();
        assert_eq!(hist.counts(), vec![1, 2, 2]);
        assert_eq!(hist.outside(), 1);
    }

    proptest! {
        #[test]
        fn prop_every_value_is_accounted_for(
            data in proptest::collection::vec(any::<f64>(), 0..200),
            bins in 1usize..40,
        ) {
            let hist = FixedRangeBuilder::new(bins, -1e3, 1e3).unwrap().build(&data).unwrap();
            prop_assert_eq!(hist.total_count() + hist.outside() + hist.missing(), data.len());
            prop_assert_eq!(hist.counts().iter().sum::<usize>(), hist.total_count());
        }
    }
}

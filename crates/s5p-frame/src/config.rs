//! Configuration for histogram and quality figures

use crate::error::{Error, Result};
use robust_biweight::BiweightConfig;
use serde::{Deserialize, Serialize};

/// Half-width of the histogram window, in robust standard deviations
pub const DEFAULT_NUM_SIGMA: f64 = 3.0;

/// Number of histogram bins
pub const DEFAULT_HIST_BINS: usize = 15;

/// Settings for centred signal/error histograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Used when the figure metadata has no `num_sigma` entry
    pub num_sigma: f64,
    pub bins: usize,
    /// Estimator for missing medians and spreads; the spread is always computed
    pub biweight: BiweightConfig,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            num_sigma: DEFAULT_NUM_SIGMA,
            bins: DEFAULT_HIST_BINS,
            biweight: BiweightConfig::default().with_spread(true),
        }
    }
}

impl HistogramConfig {
    pub fn with_num_sigma(mut self, num_sigma: f64) -> Self {
        self.num_sigma = num_sigma;
        self
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn with_biweight(mut self, biweight: BiweightConfig) -> Self {
        self.biweight = biweight;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.num_sigma.is_finite() && self.num_sigma > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "num_sigma must be finite and positive, got {}",
                self.num_sigma
            )));
        }
        if self.bins == 0 {
            return Err(Error::InvalidParameter(
                "histogram requires at least one bin".to_string(),
            ));
        }
        self.biweight.validate()?;
        Ok(())
    }
}

/// Pixel-quality thresholds, as fractions of a perfect pixel
///
/// A pixel with quality below `low` is bad; below `high` it is poor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self { low: 0.1, high: 0.8 }
    }
}

impl QualityThresholds {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let thresholds = Self { low, high };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "quality thresholds must be finite, got ({}, {})",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(Error::InvalidParameter(format!(
                "low quality threshold {} exceeds high threshold {}",
                self.low, self.high
            )));
        }
        Ok(())
    }

    /// Low threshold on the 0..=10 flag scale
    pub fn low_flag(&self) -> f64 {
        10.0 * self.low
    }

    /// High threshold on the 0..=10 flag scale
    pub fn high_flag(&self) -> f64 {
        10.0 * self.high
    }
}

//! Binned counts over explicit edges

use serde::{Deserialize, Serialize};

/// One bin with its normalised density
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge, inclusive
    pub left: f64,
    /// Upper edge, exclusive except for the last bin
    pub right: f64,
    /// Values in the bin
    pub count: usize,
    /// `count / (binned · width)`, so densities integrate to one
    pub density: f64,
}

impl HistogramBin {
    /// Distance between the edges
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Counts per bin plus the values that could not be binned
///
/// `edges` has one more entry than `counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
    outside: usize,
    missing: usize,
}

impl Histogram {
    pub(crate) fn from_counts(
        edges: Vec<f64>,
        counts: Vec<usize>,
        outside: usize,
        missing: usize,
    ) -> Self {
        debug_assert_eq!(edges.len(), counts.len() + 1);
        Self {
            edges,
            counts,
            outside,
            missing,
        }
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether there are no bins
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Bin edges, ascending
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Values that landed in a bin
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Finite values beyond the outer edges
    pub fn outside(&self) -> usize {
        self.outside
    }

    /// Non-finite values
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Bins with their densities
    pub fn bins(&self) -> Vec<HistogramBin> {
        let binned = self.total_count();
        self.counts
            .iter()
            .zip(self.edges.windows(2))
            .map(|(&count, edge)| {
                let width = edge[1] - edge[0];
                let density = if binned > 0 && width > 0.0 {
                    count as f64 / (binned as f64 * width)
                } else {
                    0.0
                };
                HistogramBin {
                    left: edge[0],
                    right: edge[1],
                    count,
                    density,
                }
            })
            .collect()
    }
}

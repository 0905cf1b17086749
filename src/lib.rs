//! Robust statistics for satellite instrument monitoring
//!
//! This crate re-exports the workspace crates:
//!
//! - [`robust_core`]: errors, the `Numeric` input trait and NaN-aware sample utilities
//! - [`robust_biweight`]: the biweight location/spread estimator and axis-wise reductions
//! - [`robust_histogram`]: fixed-range histograms
//! - [`s5p_frame`]: preparation of frames, histograms and quality maps for figures
//!
//! # Example
//!
//! ```rust
//! use s5p_stats::prelude::*;
//!
//! let estimate = biweight(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], true).unwrap();
//! assert!((estimate.location - 3.05).abs() < 0.01);
//! assert!(estimate.spread.unwrap() < 2.0);
//! ```

pub use robust_biweight;
pub use robust_core;
pub use robust_histogram;
pub use s5p_frame;

/// Commonly used types and functions
pub mod prelude {
    pub use robust_biweight::{biweight, AxisEstimate, Biweight, BiweightConfig, BiweightEstimate};
    pub use robust_core::prelude::*;
    pub use robust_histogram::{FixedRangeBuilder, Histogram, HistogramBuilder};
    pub use s5p_frame::{
        concat_bands, fill_as_nan, nan_as_fill, FigInfo, FrameProfiles, HistogramConfig,
        PixelClass, ProfileMethod, QualityMap, QualityThresholds, ScaledFrame, SignalHistograms,
    };
}

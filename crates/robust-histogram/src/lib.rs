//! Fixed-range histograms for robust statistics
//!
//! Histograms here are built over an explicit range with equal-width bins,
//! the way frame diagnostics bin centred signal values over a window of a
//! few robust standard deviations. Missing (non-finite) values are never
//! binned; they are tallied next to values that fall outside the range.
//!
//! # Examples
//!
//! ```rust
//! use robust_histogram::{FixedRangeBuilder, HistogramBuilder};
//!
//! let data = vec![-2.5, -0.4, 0.0, 0.3, 0.9, f64::NAN, 7.0];
//! let builder = FixedRangeBuilder::new(5, -3.0, 3.0).unwrap();
//! let histogram = builder.build(&data).unwrap();
//!
//! assert_eq!(histogram.len(), 5);
//! assert_eq!(histogram.total_count(), 5);
//! assert_eq!(histogram.outside(), 1);
//! assert_eq!(histogram.missing(), 1);
//! ```

#![warn(missing_docs)]

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::FixedRangeBuilder;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

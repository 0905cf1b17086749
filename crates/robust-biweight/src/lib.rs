//! Tukey biweight estimators for noisy instrument measurements
//!
//! The biweight location and scale summarise a sample while ignoring a
//! minority of outlying values. They are used wherever monitoring code needs
//! a centre or spread that a few hot pixels, cosmic-ray hits or saturated
//! rows must not drag around: per-pixel noise, frame background levels,
//! histogram centring and frame profiles.
//!
//! # Algorithm
//!
//! 1. `M0` is the median of the finite values.
//! 2. Residuals `d = x - M0` are scaled by `c·MAD + ε`, giving `u`.
//! 3. Residuals with `|u| ≥ 1` are rejected; the rest are weighted by
//!    `(1 - u²)²`.
//! 4. Location: `M0 + Σ d w / Σ w`.
//! 5. Scale: `sqrt(n Σ d² w²) / |Σ (1-u²)(1-5u²)|`.
//!
//! The default runs a single pass ([`config::DEFAULT_ITERATIONS`]).
//!
//! | Input | Location | Spread |
//! |-------|----------|--------|
//! | one finite value | that value | 0 |
//! | MAD = 0 (flat sample) | median | 0 |
//! | only NaN / ±inf | NaN | NaN |
//! | empty | error | error |
//!
//! # Examples
//!
//! ```rust
//! use robust_biweight::biweight;
//!
//! let estimate = biweight(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], true).unwrap();
//! assert!((estimate.location - 3.05).abs() < 0.01);
//! assert!(estimate.spread.unwrap() < 2.0);
//! ```
//!
//! Axis-wise reduction of a detector frame:
//!
//! ```rust
//! use ndarray::{array, Axis};
//! use robust_biweight::Biweight;
//!
//! let frame = array![[1.0, 5.0], [2.0, 5.0], [3.0, 5.0]];
//! let per_column = Biweight::with_spread().reduce_axis(&frame, Axis(0)).unwrap();
//! assert_eq!(per_column.location[1], 5.0);
//! assert_eq!(per_column.spread.unwrap()[1], 0.0);
//! ```

pub mod axis;
pub mod config;
pub mod estimator;
pub mod kernel;

pub use axis::AxisEstimate;
pub use config::BiweightConfig;
pub use estimator::{Biweight, BiweightEstimate};
pub use kernel::{BiweightKernel, KernelSums};

use robust_core::{Numeric, Result};

/// Biweight with the default constants
///
/// `spread` switches the scale estimate on.
pub fn biweight<T: Numeric>(sample: &[T], spread: bool) -> Result<BiweightEstimate> {
    let est = if spread {
        Biweight::with_spread()
    } else {
        Biweight::default()
    };
    est.estimate(sample)
}

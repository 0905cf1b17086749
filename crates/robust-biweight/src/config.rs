//! Configuration for the biweight estimator

use robust_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Conventional tuning constant for the biweight kernel
pub const DEFAULT_C: f64 = 6.0;

/// Floor added to the kernel scale so a zero MAD never divides by zero
pub const DEFAULT_EPSILON: f64 = 1e-20;

/// Default number of refinement passes
///
/// One pass derives the estimate directly from the ordinary median. Stored
/// historical statistics were produced this way, so changing the default
/// changes reported values.
pub const DEFAULT_ITERATIONS: usize = 1;

/// Upper bound accepted for `iterations`
pub const MAX_ITERATIONS: usize = 10;

/// Tuning constants for a biweight computation
///
/// These never change during a computation; every call receives them
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiweightConfig {
    /// Tuning constant: residuals beyond `c * MAD` get zero weight
    pub c: f64,
    /// Numerical floor added to `c * MAD`
    pub epsilon: f64,
    /// Number of re-centring passes (1 = single pass from the median)
    pub iterations: usize,
    /// Whether the biweight scale is computed alongside the location
    pub spread: bool,
}

impl Default for BiweightConfig {
    fn default() -> Self {
        Self {
            c: DEFAULT_C,
            epsilon: DEFAULT_EPSILON,
            iterations: DEFAULT_ITERATIONS,
            spread: false,
        }
    }
}

impl BiweightConfig {
    /// Set the tuning constant
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Set the numerical floor
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the number of refinement passes
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Request (or drop) the scale estimate
    pub fn with_spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }

    /// Check that the constants describe a usable kernel
    pub fn validate(&self) -> Result<()> {
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Tuning constant c must be finite and positive, got {}",
                self.c
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(Error::InvalidParameter(format!(
                "Iterations must be in [1, {MAX_ITERATIONS}], got {}",
                self.iterations
            )));
        }
        Ok(())
    }
}

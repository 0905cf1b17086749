//! Biweight weight kernel
//!
//! One pass of the estimator: given the current centre and the MAD of the
//! residuals around it, accumulate the four sums the location and scale
//! formulas need.

/// Sums accumulated over the residuals with `|u| < 1`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KernelSums {
    /// `Σ (1 - u²)²`
    pub weight: f64,
    /// `Σ d (1 - u²)²`
    pub weighted_residual: f64,
    /// `Σ d² (1 - u²)⁴`
    pub scale_numerator: f64,
    /// `Σ (1 - u²)(1 - 5u²)`
    pub scale_denominator: f64,
    /// Number of residuals inside the kernel support
    pub accepted: usize,
}

impl KernelSums {
    /// Location correction to add to the current centre
    ///
    /// Zero when no residual received weight.
    pub fn location_shift(&self) -> f64 {
        if self.weight > 0.0 {
            self.weighted_residual / self.weight
        } else {
            0.0
        }
    }

    /// Biweight scale for `n` finite values
    ///
    /// NaN when the denominator vanishes.
    pub fn scale(&self, n: usize) -> f64 {
        if self.scale_denominator == 0.0 {
            return f64::NAN;
        }
        (n as f64 * self.scale_numerator).sqrt() / self.scale_denominator.abs()
    }
}

/// Tukey biweight kernel with fixed tuning constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiweightKernel {
    c: f64,
    epsilon: f64,
}

impl BiweightKernel {
    /// Create a kernel from validated constants
    pub fn new(c: f64, epsilon: f64) -> Self {
        Self { c, epsilon }
    }

    /// Scale that maps a residual to `u`
    #[inline]
    pub fn scale_for(&self, mad: f64) -> f64 {
        self.c * mad + self.epsilon
    }

    /// Accumulate the kernel sums of `values` around `center`
    ///
    /// `values` must be finite.
    pub fn accumulate(&self, values: &[f64], center: f64, mad: f64) -> KernelSums {
        let scale = self.scale_for(mad);
        let mut sums = KernelSums::default();
        for &x in values {
            let d = x - center;
            let u = d / scale;
            if u.abs() >= 1.0 {
                continue;
            }
            let u2 = u * u;
            let one_minus = 1.0 - u2;
            let w = one_minus * one_minus;
            sums.weight += w;
            sums.weighted_residual += d * w;
            sums.scale_numerator += d * d * w * w;
            sums.scale_denominator += one_minus * (1.0 - 5.0 * u2);
            sums.accepted += 1;
        }
        sums
    }
}

//! Numeric input trait
//!
//! Detector frames arrive as `f32` (radiances, signals), `f64` (derived
//! products) or integer counts. Estimators accept any of them and do all
//! arithmetic in `f64`.

use std::fmt::Debug;

/// A primitive numeric type that can be read as `f64`
pub trait Numeric: Copy + Send + Sync + Debug + PartialOrd + 'static {
    /// Widen to `f64`
    fn to_f64(self) -> f64;

    /// Whether the value is a usable measurement
    ///
    /// Integers are always finite.
    fn is_finite_value(self) -> bool {
        self.to_f64().is_finite()
    }

    /// Multiply by ten in the native precision, then widen
    ///
    /// Decimal fractions stored as `f32` land on the whole number they
    /// denote (`0.7f32` gives 7, not 6.9999998...).
    fn tenfold(self) -> f64 {
        self.to_f64() * 10.0
    }
}

impl Numeric for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Numeric for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn tenfold(self) -> f64 {
        f64::from(self * 10.0)
    }
}

macro_rules! impl_numeric_lossless {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_lossless!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_numeric_wide {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_wide!(i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_conversion() {
        assert_eq!(1.5f32.to_f64(), 1.5);
        assert_eq!((-2.25f64).to_f64(), -2.25);
        assert!(!f32::NAN.is_finite_value());
        assert!(!f64::INFINITY.is_finite_value());
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(42u16.to_f64(), 42.0);
        assert_eq!((-7i8).to_f64(), -7.0);
        assert_eq!(u64::MAX.to_f64(), u64::MAX as f64);
        assert!(0u8.is_finite_value());
    }

    #[test]
    fn test_tenfold_keeps_single_precision() {
        assert_eq!(0.7f32.tenfold(), 7.0);
        assert_eq!(0.9f32.tenfold(), 9.0);
        assert!(0.7f32.to_f64() * 10.0 < 7.0);
        assert_eq!(0.5f64.tenfold(), 5.0);
        assert_eq!(3u8.tenfold(), 30.0);
    }
}

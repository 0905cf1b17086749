//! Fill-value handling for floating-point datasets
//!
//! Level-1b and level-2 products mark missing samples with the netCDF
//! default float fill. Only datasets that declare exactly that fill get
//! their fill samples replaced; any other declared fill is left alone.

use ndarray::{ArrayBase, DataMut, Dimension};
use num_traits::Float;

/// netCDF default fill for floats, `0x1.ep+122`
pub const DEFAULT_FILL_VALUE: f64 = 9.969209968386869e36;

fn default_fill<F: Float>() -> Option<F> {
    F::from(DEFAULT_FILL_VALUE)
}

fn is_default_fill<F: Float>(declared_fill: Option<F>) -> bool {
    match (declared_fill, default_fill::<F>()) {
        (Some(declared), Some(fill)) => declared == fill,
        _ => false,
    }
}

/// Replace fill samples with NaN, returning how many were replaced
///
/// Nothing changes unless `declared_fill` is the default float fill.
pub fn fill_as_nan<F, S, D>(data: &mut ArrayBase<S, D>, declared_fill: Option<F>) -> usize
where
    F: Float,
    S: DataMut<Elem = F>,
    D: Dimension,
{
    if !is_default_fill(declared_fill) {
        return 0;
    }
    let Some(fill) = default_fill::<F>() else {
        return 0;
    };

    let mut replaced = 0;
    data.map_inplace(|x| {
        if *x == fill {
            *x = F::nan();
            replaced += 1;
        }
    });
    replaced
}

/// Replace NaN samples with the default fill before writing back
///
/// The inverse of [`fill_as_nan`], under the same declared-fill condition.
pub fn nan_as_fill<F, S, D>(data: &mut ArrayBase<S, D>, declared_fill: Option<F>) -> usize
where
    F: Float,
    S: DataMut<Elem = F>,
    D: Dimension,
{
    if !is_default_fill(declared_fill) {
        return 0;
    }
    let Some(fill) = default_fill::<F>() else {
        return 0;
    };

    let mut replaced = 0;
    data.map_inplace(|x| {
        if x.is_nan() {
            *x = fill;
            replaced += 1;
        }
    });
    replaced
}

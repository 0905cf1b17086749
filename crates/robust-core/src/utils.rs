//! Utility functions for working with data slices
//!
//! Every function here treats non-finite values (NaN, ±inf) as missing
//! measurements. Functions named `nan_*` skip them; functions suffixed
//! `_sorted` expect a slice of finite values in ascending order.

use crate::{Error, Numeric, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use std::cmp::Ordering;

/// Collect the finite values of a sample as `f64`
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::finite_values;
///
/// let data = [1.0f32, f32::NAN, 3.0, f32::INFINITY];
/// assert_eq!(finite_values(&data), vec![1.0, 3.0]);
/// ```
pub fn finite_values<T: Numeric>(data: &[T]) -> Vec<f64> {
    data.iter()
        .filter(|x| x.is_finite_value())
        .map(|x| x.to_f64())
        .collect()
}

/// Total order for floats with NaN placed after every number
pub fn nan_last_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(nan_last_cmp);
    sorted
}

/// Median of a buffer of finite values, reordering it
///
/// Uses selection rather than a full sort. The buffer must not contain
/// NaN. Returns NaN for an empty buffer.
pub fn median_of_finite(values: &mut [f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    let mid = n / 2;
    let (lower, upper_mid, _) = values.select_nth_unstable_by(mid, nan_last_cmp);
    let upper_mid = *upper_mid;
    if n % 2 == 1 {
        upper_mid
    } else {
        // Largest element of the lower partition is the other middle value
        let lower_mid = lower
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        0.5 * (lower_mid + upper_mid)
    }
}

/// Median ignoring non-finite values
///
/// Returns NaN when no finite value is present.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::nan_median;
///
/// assert_eq!(nan_median(&[4.0, f64::NAN, 1.0, 3.0]), 3.0);
/// assert!(nan_median(&[f64::NAN, f64::NAN]).is_nan());
/// ```
pub fn nan_median<T: Numeric>(data: &[T]) -> f64 {
    let mut values = finite_values(data);
    median_of_finite(&mut values)
}

/// Percentile of an ascending slice of finite values
///
/// Linear interpolation between the closest ranks, `q` in `[0, 100]`.
pub fn percentile_sorted(sorted_data: &[f64], q: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&q) {
        return Err(Error::invalid_percentile(q));
    }
    let n = sorted_data.len();
    if n == 0 {
        return Err(Error::empty_input("percentile"));
    }
    let rank = q / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Ok(sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo]))
}

/// Percentile ignoring non-finite values
///
/// Fails when no finite value is present.
pub fn nan_percentile<T: Numeric>(data: &[T], q: f64) -> Result<f64> {
    let mut values = finite_values(data);
    values.sort_by(nan_last_cmp);
    percentile_sorted(&values, q)
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Median absolute deviation from the median, ignoring non-finite values
///
/// Returns NaN when no finite value is present.
pub fn nan_mad<T: Numeric>(data: &[T]) -> f64 {
    let mut values = finite_values(data);
    let center = median_of_finite(&mut values);
    for v in values.iter_mut() {
        *v = (*v - center).abs();
    }
    median_of_finite(&mut values)
}

/// MAD scaled to estimate the standard deviation of normal data
///
/// Divides by the 75th percentile of the standard normal (≈ 0.6745),
/// giving the familiar 1.4826 consistency factor.
pub fn normalized_mad<T: Numeric>(data: &[T]) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| Error::Computation(e.to_string()))?;
    Ok(nan_mad(data) / normal.inverse_cdf(0.75))
}

//! Axis-wise biweight reductions over `ndarray` arrays
//!
//! Every lane along the reduced axis is an independent sample. Lanes are
//! collected in the logical order of the remaining axes, estimated one by
//! one (or in parallel with the `parallel` feature), and written back into
//! an array whose shape is the input shape without the reduced axis.
//!
//! A lane without finite values produces NaN in its output position; it
//! never aborts the reduction.

use crate::estimator::{Biweight, BiweightEstimate};
use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, Dimension, IxDyn, RemoveAxis};
use robust_core::{Error, Numeric, Result};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-lane results of an axis-wise reduction
#[derive(Debug, Clone, PartialEq)]
pub struct AxisEstimate<D: Dimension> {
    /// Robust centre of every lane
    pub location: Array<f64, D>,
    /// Robust dispersion of every lane, present when requested
    pub spread: Option<Array<f64, D>>,
}

impl<D: Dimension> AxisEstimate<D> {
    /// Shape of the reduced output
    pub fn shape(&self) -> &[usize] {
        self.location.shape()
    }

    /// Convert to dynamic dimensionality
    pub fn into_dyn(self) -> AxisEstimate<IxDyn> {
        AxisEstimate {
            location: self.location.into_dyn(),
            spread: self.spread.map(|s| s.into_dyn()),
        }
    }
}

impl Biweight {
    /// Reduce `data` along `axis`, one estimate per lane
    ///
    /// Fails when `axis` does not exist or has length zero.
    #[instrument(level = "debug", skip(self, data), fields(shape = ?data.shape(), axis = axis.index()))]
    pub fn reduce_axis<A, S, D>(
        &self,
        data: &ArrayBase<S, D>,
        axis: Axis,
    ) -> Result<AxisEstimate<D::Smaller>>
    where
        A: Numeric,
        S: Data<Elem = A>,
        D: RemoveAxis,
    {
        if axis.index() >= data.ndim() {
            return Err(Error::invalid_axis(axis.index(), data.ndim()));
        }
        if data.len_of(axis) == 0 {
            return Err(Error::empty_input("biweight axis reduction"));
        }

        let out_dim = data.raw_dim().remove_axis(axis);
        let lanes: Vec<ArrayView1<'_, A>> = data.lanes(axis).into_iter().collect();
        debug!("Reducing {} lanes of length {}", lanes.len(), data.len_of(axis));

        let estimates = self.estimate_lanes(&lanes);

        let location = Array::from_shape_vec(
            out_dim.clone(),
            estimates.iter().map(|e| e.location).collect(),
        )
        .map_err(|e| Error::Computation(e.to_string()))?;

        let spread = if self.config().spread {
            let values = estimates
                .iter()
                .map(|e| e.spread.unwrap_or(f64::NAN))
                .collect();
            Some(Array::from_shape_vec(out_dim, values).map_err(|e| Error::Computation(e.to_string()))?)
        } else {
            None
        };

        Ok(AxisEstimate { location, spread })
    }

    /// Reduce every element of `data` into one estimate
    pub fn reduce_all<A, S, D>(&self, data: &ArrayBase<S, D>) -> Result<BiweightEstimate>
    where
        A: Numeric,
        S: Data<Elem = A>,
        D: Dimension,
    {
        if data.is_empty() {
            return Err(Error::empty_input("biweight"));
        }
        let values: Vec<f64> = data
            .iter()
            .filter(|x| x.is_finite_value())
            .map(|x| x.to_f64())
            .collect();
        Ok(self.estimate_finite(&values))
    }

    /// Reduce along `axis`, or over the whole array when `axis` is `None`
    ///
    /// The whole-array case returns zero-dimensional arrays.
    pub fn reduce<A, S, D>(
        &self,
        data: &ArrayBase<S, D>,
        axis: Option<Axis>,
    ) -> Result<AxisEstimate<IxDyn>>
    where
        A: Numeric,
        S: Data<Elem = A>,
        D: RemoveAxis,
    {
        match axis {
            Some(axis) => Ok(self.reduce_axis(data, axis)?.into_dyn()),
            None => {
                let est = self.reduce_all(data)?;
                Ok(AxisEstimate {
                    location: ndarray::arr0(est.location).into_dyn(),
                    spread: est.spread.map(|s| ndarray::arr0(s).into_dyn()),
                })
            }
        }
    }

    fn estimate_lane<A: Numeric>(&self, lane: &ArrayView1<'_, A>) -> BiweightEstimate {
        let values: Vec<f64> = lane
            .iter()
            .filter(|x| x.is_finite_value())
            .map(|x| x.to_f64())
            .collect();
        self.estimate_finite(&values)
    }

    #[cfg(not(feature = "parallel"))]
    fn estimate_lanes<A: Numeric>(&self, lanes: &[ArrayView1<'_, A>]) -> Vec<BiweightEstimate> {
        lanes.iter().map(|lane| self.estimate_lane(lane)).collect()
    }

    #[cfg(feature = "parallel")]
    fn estimate_lanes<A: Numeric>(&self, lanes: &[ArrayView1<'_, A>]) -> Vec<BiweightEstimate> {
        lanes.par_iter().map(|lane| self.estimate_lane(lane)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn test_reduce_axis_shapes() {
        let data = Array3::<f64>::from_shape_fn((4, 3, 2), |(i, j, k)| (i + 10 * j + 100 * k) as f64);
        let est = Biweight::with_spread();

        let r0 = est.reduce_axis(&data, Axis(0)).unwrap();
        assert_eq!(r0.shape(), &[3, 2]);
        assert_eq!(r0.spread.as_ref().unwrap().shape(), &[3, 2]);

        let r2 = est.reduce_axis(&data, Axis(2)).unwrap();
        assert_eq!(r2.shape(), &[4, 3]);
    }

    #[test]
    fn test_reduce_axis_values_match_lanes() {
        let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0], [100.0, 50.0]];
        let est = Biweight::default();
        let r = est.reduce_axis(&data, Axis(0)).unwrap();
        assert!(r.spread.is_none());
        assert_eq!(r.location[0], est.location(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap());
        assert_eq!(r.location[1], est.location(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap());
    }

    #[test]
    fn test_all_nan_lane_does_not_abort() {
        let data = array![[1.0, f64::NAN], [2.0, f64::NAN], [3.0, f64::NAN]];
        let r = Biweight::with_spread().reduce_axis(&data, Axis(0)).unwrap();
        assert_eq!(r.location[0], 2.0);
        assert!(r.location[1].is_nan());
        assert!(r.spread.unwrap()[1].is_nan());
    }

    #[test]
    fn test_invalid_axis_and_empty_axis() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        assert!(matches!(
            Biweight::default().reduce_axis(&data, Axis(2)),
            Err(Error::InvalidParameter(_))
        ));

        let empty = ndarray::Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            Biweight::default().reduce_axis(&empty, Axis(0)),
            Err(Error::InvalidInput(_))
        ));
        // Reducing the non-empty axis of a degenerate array gives an empty result
        let r = Biweight::default().reduce_axis(&empty, Axis(1)).unwrap();
        assert_eq!(r.shape(), &[0]);
    }

    #[test]
    fn test_reduce_none_flattens() {
        let data = array![[1.0f32, 2.0], [3.0, 4.0]];
        let r = Biweight::with_spread().reduce(&data, None).unwrap();
        assert_eq!(r.location.ndim(), 0);
        assert_eq!(r.location.iter().next().copied().unwrap(), Biweight::with_spread().location(&[1.0, 2.0, 3.0, 4.0]).unwrap());

        let r = Biweight::with_spread().reduce(&data, Some(Axis(1))).unwrap();
        assert_eq!(r.shape(), &[2]);
    }
}

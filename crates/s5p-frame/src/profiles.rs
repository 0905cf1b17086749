//! Column and row profiles of a detector frame
//!
//! The `column` profile has one value per row (reduction over the columns,
//! axis 1) and is drawn next to the image; the `row` profile has one value
//! per column (reduction over the rows, axis 0) and is drawn below it.

use crate::error::{Error, Result};
use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};
use robust_biweight::{Biweight, BiweightConfig};
use robust_core::utils::nan_median;
use robust_core::Numeric;
use tracing::{debug, instrument};

/// How missing profiles are derived from the frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProfileMethod {
    /// NaN-aware median
    #[default]
    Median,
    /// Biweight location with the given constants
    Biweight(BiweightConfig),
}

/// Profiles accompanying a frame image
#[derive(Debug, Clone, PartialEq)]
pub struct FrameProfiles {
    /// One value per row
    pub column: Array1<f64>,
    /// One value per column
    pub row: Array1<f64>,
}

impl FrameProfiles {
    /// Derive both profiles from `frame`
    pub fn compute<A, S>(frame: &ArrayBase<S, Ix2>, method: &ProfileMethod) -> Result<Self>
    where
        A: Numeric,
        S: Data<Elem = A>,
    {
        Self::with_overrides(frame, None, None, method)
    }

    /// Use caller-supplied profiles where given and derive the rest
    #[instrument(level = "debug", skip(frame, column, row), fields(shape = ?frame.shape()))]
    pub fn with_overrides<A, S>(
        frame: &ArrayBase<S, Ix2>,
        column: Option<Array1<f64>>,
        row: Option<Array1<f64>>,
        method: &ProfileMethod,
    ) -> Result<Self>
    where
        A: Numeric,
        S: Data<Elem = A>,
    {
        let (nrows, ncols) = frame.dim();
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidInput(format!(
                "frame of shape ({nrows}, {ncols}) has no pixels"
            )));
        }

        let column = match column {
            Some(profile) => check_len(profile, nrows, "column")?,
            None => reduce(frame, Axis(1), method)?,
        };
        let row = match row {
            Some(profile) => check_len(profile, ncols, "row")?,
            None => reduce(frame, Axis(0), method)?,
        };

        Ok(Self { column, row })
    }
}

fn check_len(profile: Array1<f64>, expected: usize, name: &str) -> Result<Array1<f64>> {
    if profile.len() != expected {
        let context = format!("{name} profile");
        return Err(robust_core::Error::size_mismatch(expected, profile.len(), &context).into());
    }
    Ok(profile)
}

fn reduce<A, S>(frame: &ArrayBase<S, Ix2>, axis: Axis, method: &ProfileMethod) -> Result<Array1<f64>>
where
    A: Numeric,
    S: Data<Elem = A>,
{
    debug!("Deriving profile over axis {} with {:?}", axis.index(), method);
    match method {
        ProfileMethod::Median => Ok(frame.map_axis(axis, |lane| nan_median(&lane.to_vec()))),
        ProfileMethod::Biweight(config) => {
            let estimator = Biweight::new(config.with_spread(false))?;
            Ok(estimator.reduce_axis(frame, axis)?.location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_median_profiles() {
        let frame = array![
            [1.0, 2.0, 3.0, 100.0],
            [4.0, f64::NAN, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
        ];
        let p = FrameProfiles::compute(&frame, &ProfileMethod::Median).unwrap();
        assert_eq!(p.column, array![2.5, 6.0, 9.5]);
        assert_eq!(p.row, array![4.0, 5.5, 6.0, 11.0]);
    }

    #[test]
    fn test_biweight_profiles_match_axis_reduction() {
        let frame = Array1::linspace(0.0, 47.0, 48).into_shape_with_order((6, 8)).unwrap();
        let cfg = BiweightConfig::default();
        let p = FrameProfiles::compute(&frame, &ProfileMethod::Biweight(cfg)).unwrap();
        let est = Biweight::new(cfg).unwrap();
        assert_eq!(p.column, est.reduce_axis(&frame, Axis(1)).unwrap().location);
        assert_eq!(p.row, est.reduce_axis(&frame, Axis(0)).unwrap().location);
        assert_eq!(p.column.len(), 6);
        assert_eq!(p.row.len(), 8);
    }

    #[test]
    fn test_overrides_win() {
        let frame = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let column = array![-1.0, -2.0, -3.0];
        let p = FrameProfiles::with_overrides(&frame, Some(column.clone()), None, &ProfileMethod::Median)
            .unwrap();
        assert_eq!(p.column, column);
        assert_eq!(p.row, array![3.0, 4.0]);

        let bad = FrameProfiles::with_overrides(&frame, None, Some(array![1.0]), &ProfileMethod::Median);
        assert!(matches!(
            bad,
            Err(Error::RobustCore(robust_core::Error::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        let frame = ndarray::Array2::<f32>::zeros((0, 4));
        assert!(matches!(
            FrameProfiles::compute(&frame, &ProfileMethod::Median),
            Err(Error::InvalidInput(_))
        ));
    }
}

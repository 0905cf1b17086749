//! Categorical pixel-quality maps
//!
//! Detector pixel quality (`dpqm`) is a fraction in `[0, 1]` per pixel. It is
//! turned into an integer flag `trunc(10 · dpqm)` and classified against two
//! thresholds. Rows and columns that are mostly unused by the instrument,
//! and pixels without a quality value, are flagged `-1`.

use crate::config::QualityThresholds;
use crate::error::{Error, Result};
use crate::fig_info::FigInfo;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use robust_core::Numeric;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Flag of a pixel outside the used detector area
pub const UNUSED_FLAG: i8 = -1;

/// Display category of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelClass {
    Unused,
    Bad,
    Poor,
    Good,
}

impl PixelClass {
    /// Classify a quality flag
    pub fn from_flag(flag: i8, thresholds: &QualityThresholds) -> Self {
        let value = f64::from(flag);
        if flag < 0 {
            PixelClass::Unused
        } else if value < thresholds.low_flag() {
            PixelClass::Bad
        } else if value < thresholds.high_flag() {
            PixelClass::Poor
        } else {
            PixelClass::Good
        }
    }

    /// Palette colour used for the category
    pub fn color(self) -> &'static str {
        match self {
            PixelClass::Unused => "#BBBBBB",
            PixelClass::Bad => "#EE6677",
            PixelClass::Poor => "#CCBB44",
            PixelClass::Good => "#FFFFFF",
        }
    }
}

/// Quality flags with bad-pixel statistics
///
/// "Bad" counts pixels with `0 <= flag < 10·low`; "bad or poor" counts
/// `0 <= flag < 10·high`. Per-row counts have one entry per row, per-column
/// counts one entry per column.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityMap {
    pub flags: Array2<i8>,
    pub thresholds: QualityThresholds,
    pub unused_rows: Vec<usize>,
    pub unused_columns: Vec<usize>,
    pub bad_per_row: Array1<usize>,
    pub bad_or_poor_per_row: Array1<usize>,
    pub bad_per_column: Array1<usize>,
    pub bad_or_poor_per_column: Array1<usize>,
    pub bad_total: usize,
    pub bad_or_poor_total: usize,
}

impl QualityMap {
    /// Build the map from pixel-quality fractions
    ///
    /// A column is unused when its quality sum is below `rows / 4`, a row
    /// when its sum is below `columns / 4` (integer division). Missing
    /// quality values do not contribute to the sums.
    #[instrument(level = "debug", skip(dpqm), fields(shape = ?dpqm.shape()))]
    pub fn from_dpqm<A, S>(dpqm: &ArrayBase<S, Ix2>, thresholds: QualityThresholds) -> Result<Self>
    where
        A: Numeric,
        S: Data<Elem = A>,
    {
        thresholds.validate()?;
        let (nrows, ncols) = dpqm.dim();
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidInput(format!(
                "quality map of shape ({nrows}, {ncols}) has no pixels"
            )));
        }

        let mut flags = dpqm.mapv(quality_flag);

        let finite_sum = |lane: ndarray::ArrayView1<'_, A>| -> f64 {
            lane.iter()
                .filter(|x| x.is_finite_value())
                .map(|x| x.to_f64())
                .sum()
        };
        let column_sums = dpqm.map_axis(Axis(0), finite_sum);
        let row_sums = dpqm.map_axis(Axis(1), finite_sum);

        let unused_columns = indices_below(&column_sums, (nrows / 4) as f64);
        let unused_rows = indices_below(&row_sums, (ncols / 4) as f64);
        debug!(
            "Marking {} rows and {} columns unused",
            unused_rows.len(),
            unused_columns.len()
        );
        for &col in &unused_columns {
            flags.column_mut(col).fill(UNUSED_FLAG);
        }
        for &row in &unused_rows {
            flags.row_mut(row).fill(UNUSED_FLAG);
        }

        let low = thresholds.low_flag();
        let high = thresholds.high_flag();
        let is_bad = |flag: i8| flag >= 0 && f64::from(flag) < low;
        let is_bad_or_poor = |flag: i8| flag >= 0 && f64::from(flag) < high;

        let bad_per_row = flags.map_axis(Axis(1), |lane| lane.iter().filter(|&&f| is_bad(f)).count());
        let bad_or_poor_per_row =
            flags.map_axis(Axis(1), |lane| lane.iter().filter(|&&f| is_bad_or_poor(f)).count());
        let bad_per_column = flags.map_axis(Axis(0), |lane| lane.iter().filter(|&&f| is_bad(f)).count());
        let bad_or_poor_per_column =
            flags.map_axis(Axis(0), |lane| lane.iter().filter(|&&f| is_bad_or_poor(f)).count());

        Ok(Self {
            bad_total: bad_per_row.sum(),
            bad_or_poor_total: bad_or_poor_per_row.sum(),
            flags,
            thresholds,
            unused_rows,
            unused_columns,
            bad_per_row,
            bad_or_poor_per_row,
            bad_per_column,
            bad_or_poor_per_column,
        })
    }

    /// Category of the pixel at `(row, column)`, `None` when out of bounds
    pub fn class_at(&self, row: usize, column: usize) -> Option<PixelClass> {
        self.flags
            .get((row, column))
            .map(|&flag| PixelClass::from_flag(flag, &self.thresholds))
    }

    /// Category of every pixel
    pub fn classes(&self) -> Array2<PixelClass> {
        self.flags
            .mapv(|flag| PixelClass::from_flag(flag, &self.thresholds))
    }

    /// Thresholds and totals as figure metadata
    pub fn fig_info(&self) -> FigInfo {
        FigInfo::new()
            .with("thres_01", self.thresholds.low)
            .with("dpqf_01", self.bad_total)
            .with("thres_08", self.thresholds.high)
            .with("dpqf_08", self.bad_or_poor_total)
    }
}

fn quality_flag<A: Numeric>(value: A) -> i8 {
    if !value.is_finite_value() {
        return UNUSED_FLAG;
    }
    // Saturating cast keeps out-of-range fractions at the flag limits
    value.tenfold().trunc() as i8
}

fn indices_below(sums: &Array1<f64>, limit: f64) -> Vec<usize> {
    sums.iter()
        .enumerate()
        .filter(|(_, sum)| **sum < limit)
        .map(|(i, _)| i)
        .collect()
}

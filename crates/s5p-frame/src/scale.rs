//! Colour ranges and unit scaling for frame images
//!
//! The image colour range is clipped to the 10th and 90th percentile of the
//! finite pixels. When the data unit counts electrons, frame, profiles and
//! range are divided by a power of thousand so the axis labels stay short.

use crate::error::{Error, Result};
use crate::profiles::FrameProfiles;
use ndarray::{Array2, ArrayBase, Data, Dimension, Ix2};
use robust_core::utils::{nan_last_cmp, percentile_sorted};
use robust_core::Numeric;
use serde::{Deserialize, Serialize};

const ELECTRON: &str = "electron";

/// Divisors and unit prefixes, largest first
const ELECTRON_PREFIXES: [(f64, &str); 3] = [(1e9, "Ge"), (1e6, "Me"), (1e3, "ke")];

/// Percentile-clipped colour range of an image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    /// 10th percentile
    pub low: f64,
    /// 90th percentile
    pub high: f64,
}

impl ColorRange {
    /// Range of the finite values in `frame`
    pub fn from_frame<A, S, D>(frame: &ArrayBase<S, D>) -> Result<Self>
    where
        A: Numeric,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut values: Vec<f64> = frame
            .iter()
            .filter(|x| x.is_finite_value())
            .map(|x| x.to_f64())
            .collect();
        if values.is_empty() {
            return Err(Error::InvalidInput(
                "frame has no finite values for a colour range".to_string(),
            ));
        }
        values.sort_by(nan_last_cmp);
        Ok(Self {
            low: percentile_sorted(&values, 10.0)?,
            high: percentile_sorted(&values, 90.0)?,
        })
    }

    /// Largest magnitude of the two limits
    pub fn max_abs(&self) -> f64 {
        self.low.abs().max(self.high.abs())
    }

    /// Both limits divided by `divisor`
    pub fn scaled(&self, divisor: f64) -> Self {
        Self {
            low: self.low / divisor,
            high: self.high / divisor,
        }
    }
}

/// Display unit for a frame and its axis label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    /// Every value is divided by this
    pub divisor: f64,
    /// Unit after prefixing, if the data has one
    pub unit: Option<String>,
    /// `"{label} [{unit}]"`, or the bare label without a unit
    pub label: String,
}

impl UnitScale {
    /// Pick the scale for data spanning `range`
    ///
    /// Only units mentioning `electron` are rescaled: by 1e9, 1e6 or 1e3
    /// when the larger of `|low|` and `|high|` strictly exceeds it, with
    /// `electron` replaced by `Ge`, `Me`, `ke` or plain `e`.
    pub fn for_range(range: &ColorRange, label: &str, unit: Option<&str>) -> Self {
        let Some(unit) = unit else {
            return Self {
                divisor: 1.0,
                unit: None,
                label: label.to_string(),
            };
        };

        let (divisor, unit) = if unit.contains(ELECTRON) {
            let max_value = range.max_abs();
            let (divisor, prefix) = ELECTRON_PREFIXES
                .iter()
                .copied()
                .find(|&(divisor, _)| max_value > divisor)
                .unwrap_or((1.0, "e"));
            (divisor, unit.replace(ELECTRON, prefix))
        } else {
            (1.0, unit.to_string())
        };

        Self {
            divisor,
            label: format!("{label} [{unit}]"),
            unit: Some(unit),
        }
    }
}

/// A frame ready for display: scaled values, profiles and colour range
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledFrame {
    /// Pixel values in display units
    pub frame: Array2<f64>,
    /// Profiles in display units
    pub profiles: FrameProfiles,
    /// Colour range in display units
    pub range: ColorRange,
    /// Unit and label the values were scaled to
    pub scale: UnitScale,
}

impl ScaledFrame {
    /// Compute the colour range and unit scale, then apply it
    pub fn prepare<A, S>(
        frame: &ArrayBase<S, Ix2>,
        profiles: FrameProfiles,
        label: &str,
        unit: Option<&str>,
    ) -> Result<Self>
    where
        A: Numeric,
        S: Data<Elem = A>,
    {
        let range = ColorRange::from_frame(frame)?;
        let scale = UnitScale::for_range(&range, label, unit);
        let divisor = scale.divisor;

        Ok(Self {
            frame: frame.mapv(|x| x.to_f64() / divisor),
            profiles: FrameProfiles {
                column: profiles.column / divisor,
                row: profiles.row / divisor,
            },
            range: range.scaled(divisor),
            scale,
        })
    }
}

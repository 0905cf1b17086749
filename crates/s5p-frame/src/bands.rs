//! Joining per-band frames into one detector image

use crate::error::{Error, Result};
use ndarray::{concatenate, Array2, ArrayView2, Axis};

/// Concatenate per-band frames side by side along the column axis
///
/// All frames must have the same number of rows.
pub fn concat_bands<A: Clone>(bands: &[ArrayView2<'_, A>]) -> Result<Array2<A>> {
    let Some(first) = bands.first() else {
        return Err(Error::InvalidInput("no bands to concatenate".to_string()));
    };

    let rows = first.nrows();
    if let Some((index, band)) = bands.iter().enumerate().find(|(_, b)| b.nrows() != rows) {
        let context = format!("rows of band {index}");
        return Err(robust_core::Error::size_mismatch(rows, band.nrows(), &context).into());
    }

    Ok(concatenate(Axis(1), bands)?)
}

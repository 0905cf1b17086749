//! Centred signal and error histograms
//!
//! Both quantities are binned around their robust centre over a window of
//! `±num_sigma` robust standard deviations. Centres and spreads already in
//! the figure metadata are reused; missing ones are estimated with the
//! biweight and written back, so the metadata always documents the window.

use crate::config::HistogramConfig;
use crate::error::{Error, Result};
use crate::fig_info::FigInfo;
use ndarray::{ArrayBase, Data, Dimension};
use robust_biweight::Biweight;
use robust_core::Numeric;
use robust_histogram::{FixedRangeBuilder, Histogram, HistogramBuilder};
use tracing::{debug, instrument};

/// Histogram of values centred on their robust median
#[derive(Debug, Clone, PartialEq)]
pub struct CentredHistogram {
    /// Centre subtracted before binning
    pub median: f64,
    /// Robust standard deviation setting the window width
    pub spread: f64,
    /// Counts of the centred values
    pub histogram: Histogram,
}

/// Signal and error histograms with the metadata that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct SignalHistograms {
    /// Histogram of the signal
    pub signal: CentredHistogram,
    /// Histogram of the signal uncertainty
    pub error: CentredHistogram,
    /// Metadata including every centre and spread used
    pub fig_info: FigInfo,
}

impl SignalHistograms {
    /// Build both histograms
    ///
    /// Only finite values are binned. Keys read and written in `fig_info`
    /// are `num_sigma`, `sign_median`, `sign_spread`, `error_median` and
    /// `error_spread`.
    #[instrument(level = "debug", skip_all, fields(signal = signal.len(), error = error.len()))]
    pub fn build<A, S1, S2, D1, D2>(
        signal: &ArrayBase<S1, D1>,
        error: &ArrayBase<S2, D2>,
        fig_info: Option<FigInfo>,
        config: &HistogramConfig,
    ) -> Result<Self>
    where
        A: Numeric,
        S1: Data<Elem = A>,
        S2: Data<Elem = A>,
        D1: Dimension,
        D2: Dimension,
    {
        config.validate()?;
        let mut fig_info = fig_info.unwrap_or_default();
        let num_sigma = match fig_info.get("num_sigma") {
            Some(value) => value.as_f64().ok_or_else(|| {
                Error::InvalidInput(format!("num_sigma must be numeric, got {value}"))
            })?,
            None => {
                fig_info.insert("num_sigma", config.num_sigma);
                config.num_sigma
            }
        };

        let signal = centred_histogram(signal, "sign", num_sigma, &mut fig_info, config)?;
        let error = centred_histogram(error, "error", num_sigma, &mut fig_info, config)?;

        Ok(Self {
            signal,
            error,
            fig_info,
        })
    }
}

fn centred_histogram<A, S, D>(
    data: &ArrayBase<S, D>,
    prefix: &str,
    num_sigma: f64,
    fig_info: &mut FigInfo,
    config: &HistogramConfig,
) -> Result<CentredHistogram>
where
    A: Numeric,
    S: Data<Elem = A>,
    D: Dimension,
{
    let values: Vec<f64> = data
        .iter()
        .filter(|x| x.is_finite_value())
        .map(|x| x.to_f64())
        .collect();
    if values.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no finite values for the {prefix} histogram"
        )));
    }

    let median_key = format!("{prefix}_median");
    let spread_key = format!("{prefix}_spread");
    let (median, spread) = match (fig_info.get_f64(&median_key), fig_info.get_f64(&spread_key)) {
        (Some(median), Some(spread)) => (median, spread),
        _ => {
            let estimator = Biweight::new(config.biweight.with_spread(true))?;
            let (median, spread) = estimator.location_and_spread(&values)?;
            debug!("Estimated {prefix} centre {median} and spread {spread}");
            fig_info.insert(median_key, median);
            fig_info.insert(spread_key, spread);
            (median, spread)
        }
    };

    let centred: Vec<f64> = values.iter().map(|x| x - median).collect();
    let half_width = num_sigma * spread;
    let builder = FixedRangeBuilder::new(config.bins, -half_width, half_width)?;
    let histogram = builder.build(&centred)?;

    Ok(CentredHistogram {
        median,
        spread,
        histogram,
    })
}

//! Frame preparation for instrument monitoring figures
//!
//! Everything between reading a detector product and rendering a figure
//! that is pure arithmetic on arrays:
//!
//! | Step | Module |
//! |------|--------|
//! | fill values ↔ NaN | [`fill`] |
//! | per-band frames → one image | [`bands`] |
//! | column/row profiles | [`profiles`] |
//! | colour range and electron units | [`scale`] |
//! | centred signal/error histograms | [`hist`] |
//! | pixel-quality classes and counts | [`quality`] |
//! | ordered figure metadata | [`fig_info`] |
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use s5p_frame::{FrameProfiles, ProfileMethod, ScaledFrame};
//!
//! let frame = array![[1200.0, 1500.0, 1800.0], [2100.0, f64::NAN, 2500.0]];
//! let profiles = FrameProfiles::compute(&frame, &ProfileMethod::Median).unwrap();
//! let scaled = ScaledFrame::prepare(&frame, profiles, "signal", Some("electron")).unwrap();
//!
//! assert_eq!(scaled.scale.label, "signal [ke]");
//! assert_eq!(scaled.profiles.column.len(), 2);
//! ```

pub mod bands;
pub mod config;
pub mod error;
pub mod fig_info;
pub mod fill;
pub mod hist;
pub mod profiles;
pub mod quality;
pub mod scale;

pub use bands::concat_bands;
pub use config::{HistogramConfig, QualityThresholds};
pub use error::{Error, Result};
pub use fig_info::{FigInfo, FigValue};
pub use fill::{fill_as_nan, nan_as_fill, DEFAULT_FILL_VALUE};
pub use hist::{CentredHistogram, SignalHistograms};
pub use profiles::{FrameProfiles, ProfileMethod};
pub use quality::{PixelClass, QualityMap};
pub use scale::{ColorRange, ScaledFrame, UnitScale};

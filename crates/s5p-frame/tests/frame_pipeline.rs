//! A detector frame travelling through every preparation step

use approx::assert_relative_eq;
use ndarray::{Array2, Axis};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_biweight::BiweightConfig;
use s5p_frame::{
    concat_bands, fill_as_nan, nan_as_fill, FrameProfiles, HistogramConfig, PixelClass,
    ProfileMethod, QualityMap, QualityThresholds, ScaledFrame, SignalHistograms,
    DEFAULT_FILL_VALUE,
};

fn band(rows: usize, cols: usize, level: f64, seed: u64) -> Array2<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 25.0).unwrap();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        if (r + c) % 37 == 0 {
            DEFAULT_FILL_VALUE as f32
        } else {
            (level + noise.sample(&mut rng)) as f32
        }
    })
}

#[test]
fn test_signal_frame_pipeline() {
    let fill = DEFAULT_FILL_VALUE as f32;
    let mut band7 = band(32, 48, 40_000.0, 1);
    let mut band8 = band(32, 48, 42_000.0, 2);
    let replaced = fill_as_nan(&mut band7, Some(fill)) + fill_as_nan(&mut band8, Some(fill));
    assert!(replaced > 0);

    let frame = concat_bands(&[band7.view(), band8.view()]).unwrap();
    assert_eq!(frame.dim(), (32, 96));

    let profiles = FrameProfiles::compute(&frame, &ProfileMethod::Median).unwrap();
    assert_eq!(profiles.column.len(), 32);
    assert_eq!(profiles.row.len(), 96);
    assert!(profiles.row.iter().take(48).all(|v| (v - 40_000.0).abs() < 100.0));
    assert!(profiles.row.iter().skip(48).all(|v| (v - 42_000.0).abs() < 100.0));

    let scaled = ScaledFrame::prepare(&frame, profiles, "signal", Some("electron/s")).unwrap();
    assert_eq!(scaled.scale.label, "signal [ke/s]");
    assert!(scaled.range.low > 39.0 && scaled.range.high < 43.0);
    assert!(scaled.frame.iter().filter(|v| v.is_nan()).count() == replaced);

    // Write-back restores the fill in the scaled copy
    let mut restored = scaled.frame.clone();
    assert_eq!(nan_as_fill(&mut restored, Some(DEFAULT_FILL_VALUE)), replaced);
}

#[test]
fn test_biweight_profiles_reject_hot_pixels() {
    let mut frame = band(16, 20, 1_000.0, 3).mapv(f64::from);
    fill_as_nan(&mut frame, Some(DEFAULT_FILL_VALUE));
    frame.column_mut(4).fill(1e6);
    frame.row_mut(9).map_inplace(|v| *v += 5e5);

    let method = ProfileMethod::Biweight(BiweightConfig::default());
    let profiles = FrameProfiles::compute(&frame, &method).unwrap();
    for (i, v) in profiles.column.iter().enumerate() {
        if i != 9 {
            assert!((v - 1_000.0).abs() < 50.0, "row {i}: {v}");
        }
    }
    assert!(profiles.row[4] > 1e5);
    assert_eq!(profiles.row.len_of(Axis(0)), 20);
}

#[test]
fn test_histograms_and_quality_share_metadata_style() {
    let signal = band(24, 24, 500.0, 4).mapv(f64::from);
    let error = signal.mapv(|v| v.abs().sqrt());
    let hists = SignalHistograms::build(&signal, &error, None, &HistogramConfig::default()).unwrap();
    assert_relative_eq!(hists.signal.median, 500.0, epsilon = 10.0);
    assert!(hists.signal.spread > 15.0 && hists.signal.spread < 35.0);
    assert_eq!(hists.signal.histogram.missing(), 0);
    assert!(hists.signal.histogram.total_count() > 500);
    let bins = hists.signal.histogram.bins();
    assert_eq!(bins.len(), 15);
    assert_relative_eq!(bins[0].left, -3.0 * hists.signal.spread, epsilon = 1e-9);
    let area: f64 = bins.iter().map(|b| b.density * b.width()).sum();
    assert_relative_eq!(area, 1.0, epsilon = 1e-12);

    let dpqm = Array2::from_shape_fn((24, 24), |(r, c)| if r == c { 0.0 } else { 0.95 });
    let quality = QualityMap::from_dpqm(&dpqm, QualityThresholds::default()).unwrap();
    assert_eq!(quality.bad_total, 24);
    assert_eq!(quality.class_at(3, 3), Some(PixelClass::Bad));
    assert_eq!(quality.class_at(3, 4), Some(PixelClass::Good));

    let json = serde_json::to_string(&quality.fig_info()).unwrap();
    assert_eq!(json, r#"{"thres_01":0.1,"dpqf_01":24,"thres_08":0.8,"dpqf_08":24}"#);
    assert!(serde_json::to_string(&hists.fig_info).unwrap().starts_with(r#"{"num_sigma":3.0"#));
}

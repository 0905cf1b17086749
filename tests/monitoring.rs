//! Monitoring statistics through the umbrella crate

use anyhow::Result;
use ndarray::{Array2, Axis};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use s5p_stats::prelude::*;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Several tests share the global subscriber
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

fn dark_frames(frames: usize, pixels: usize, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 4.0).unwrap();
    Array2::from_shape_fn((frames, pixels), |(f, p)| {
        let level = 200.0 + (p % 7) as f64;
        match (f * 13 + p) % 41 {
            // Cosmic-ray hits
            0 => level + 3_000.0,
            1 => f64::NAN,
            _ => level + noise.sample(&mut rng),
        }
    })
}

#[test]
fn test_per_pixel_noise_from_frame_stack() -> Result<()> {
    init_tracing();
    let stack = dark_frames(120, 64, 9);
    let estimator = Biweight::with_spread();
    let per_pixel = estimator.reduce_axis(&stack, Axis(0))?;
    let noise = per_pixel.spread.as_ref().expect("spread requested");

    for (p, (&level, &sigma)) in per_pixel.location.iter().zip(noise.iter()).enumerate() {
        let expected = 200.0 + (p % 7) as f64;
        assert!((level - expected).abs() < 2.0, "pixel {p}: level {level}");
        assert!(sigma > 3.0 && sigma < 5.5, "pixel {p}: noise {sigma}");
    }
    info!(pixels = per_pixel.location.len(), "per-pixel noise computed");
    Ok(())
}

#[test]
fn test_background_level_per_frame() -> Result<()> {
    init_tracing();
    let stack = dark_frames(10, 700, 4);
    let per_frame = Biweight::default().reduce(&stack, Some(Axis(1)))?;
    assert_eq!(per_frame.shape(), &[10]);
    for level in per_frame.location.iter() {
        assert!((level - 203.0).abs() < 1.0);
    }

    let overall = Biweight::default().reduce(&stack, None)?;
    assert_eq!(overall.location.ndim(), 0);
    Ok(())
}

#[test]
fn test_frame_figure_inputs() -> Result<()> {
    init_tracing();
    let frame = dark_frames(40, 60, 2);
    let profiles = FrameProfiles::compute(&frame, &ProfileMethod::default())?;
    let scaled = ScaledFrame::prepare(&frame, profiles, "dark", Some("electron"))?;
    assert_eq!(scaled.scale.label, "dark [e]");
    assert_eq!(scaled.scale.divisor, 1.0);

    let error = frame.mapv(|v| v.sqrt());
    let hists = SignalHistograms::build(&frame, &error, None, &HistogramConfig::default())?;
    let fig_info = &hists.fig_info;
    assert!(fig_info.contains_key("sign_spread"));
    assert!(hists.signal.histogram.outside() > 0);
    info!(%fig_info, "histogram metadata");
    Ok(())
}

#[test]
fn test_estimate_serialises() -> Result<()> {
    let estimate = biweight(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], true)?;
    let json = serde_json::to_value(estimate)?;
    approx::assert_relative_eq!(json["location"].as_f64().unwrap_or(f64::NAN), 4.403800848123135, max_relative = 1e-12);
    assert_eq!(json["n_finite"], 8);
    Ok(())
}

mod common;

use ndarray::Array3;
use omnirot_core::error::OmniError;
use omnirot_core::raster::Raster;
use omnirot_core::sampler::{fetch_bilinear, fetch_pixel, gray, gray_bilinear, gray_pixel};

use common::{gray_raster, textured_raster};

// ---------------------------------------------------------------------------
// Raster
// ---------------------------------------------------------------------------

#[test]
fn test_from_raw_layout() {
    let bytes: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8).collect();
    let r = Raster::from_raw(3, 2, 3, bytes.clone()).unwrap();
    assert_eq!(r.width(), 3);
    assert_eq!(r.height(), 2);
    assert_eq!(r.channels(), 3);
    // (row 1, col 2) starts at (1 * 3 + 2) * 3 = 15
    assert_eq!(r.rgb(2, 1), [15, 16, 17]);
    assert_eq!(r.into_raw(), bytes);
}

#[test]
fn test_from_raw_rejects_wrong_length() {
    let err = Raster::from_raw(4, 4, 3, vec![0; 47]).unwrap_err();
    assert!(matches!(
        err,
        OmniError::BufferSize {
            expected: 48,
            actual: 47
        }
    ));
}

#[test]
fn test_rejects_unsupported_channels() {
    let err = Raster::from_raw(2, 2, 1, vec![0; 4]).unwrap_err();
    assert!(matches!(err, OmniError::UnsupportedChannels(1)));
    assert!(Raster::new(Array3::zeros((2, 2, 2))).is_err());
}

#[test]
fn test_rejects_empty_image() {
    let err = Raster::zeros(0, 10, 3).unwrap_err();
    assert!(matches!(
        err,
        OmniError::InvalidDimensions {
            width: 0,
            height: 10
        }
    ));
}

#[test]
fn test_set_rgb_keeps_alpha() {
    let mut r = Raster::from_raw(1, 1, 4, vec![1, 2, 3, 200]).unwrap();
    r.set_rgb(0, 0, [9, 8, 7]);
    assert_eq!(r.as_raw(), vec![9, 8, 7, 200]);
    assert!(r.has_alpha());
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

#[test]
fn test_fetch_pixel_out_of_bounds_is_black() {
    let r = gray_raster(4, 3, |_, _| 255);
    assert_eq!(fetch_pixel(&r, 0, 0), [255, 255, 255]);
    assert_eq!(fetch_pixel(&r, -1, 0), [0, 0, 0]);
    assert_eq!(fetch_pixel(&r, 0, -1), [0, 0, 0]);
    assert_eq!(fetch_pixel(&r, 4, 0), [0, 0, 0]);
    assert_eq!(fetch_pixel(&r, 0, 3), [0, 0, 0]);
}

#[test]
fn test_bilinear_at_integer_matches_pixel() {
    let r = textured_raster(16, 8, 3);
    for v in 0..8 {
        for u in 0..16 {
            assert_eq!(
                fetch_bilinear(&r, u as f64, v as f64),
                fetch_pixel(&r, u, v),
                "mismatch at ({u}, {v})"
            );
        }
    }
}

#[test]
fn test_bilinear_midpoint_rounds() {
    let r = gray_raster(2, 1, |col, _| if col == 0 { 0 } else { 255 });
    // 127.5 rounds up
    assert_eq!(fetch_bilinear(&r, 0.5, 0.0), [128, 128, 128]);
    assert_eq!(fetch_bilinear(&r, 0.25, 0.0), [64, 64, 64]);
}

#[test]
fn test_bilinear_blends_black_past_edge() {
    let r = gray_raster(4, 4, |_, _| 200);
    assert_eq!(fetch_bilinear(&r, 3.5, 1.0), [100, 100, 100]);
    assert_eq!(fetch_bilinear(&r, -0.5, 1.0), [100, 100, 100]);
    assert_eq!(fetch_bilinear(&r, 10.0, 1.0), [0, 0, 0]);
}

#[test]
fn test_bilinear_far_or_non_finite_is_black() {
    let r = gray_raster(4, 4, |_, _| 200);
    for (u, v) in [
        (1e19, 1.0),
        (-1e19, 1.0),
        (1.0, 1e19),
        (f64::INFINITY, 1.0),
        (1.0, f64::NEG_INFINITY),
        (f64::NAN, 1.0),
        (1.0, f64::NAN),
    ] {
        assert_eq!(fetch_bilinear(&r, u, v), [0, 0, 0], "at ({u}, {v})");
    }
    // One tap still inside at the far edge.
    assert_eq!(fetch_bilinear(&r, 3.5, 3.0), [100, 100, 100]);
    assert_eq!(fetch_bilinear(&r, -0.5, -0.5), [50, 50, 50]);
}

#[test]
fn test_gray_is_channel_mean() {
    assert_eq!(gray([30, 60, 90]), 60.0);
    let r = Raster::from_raw(1, 1, 3, vec![10, 20, 60]).unwrap();
    assert_eq!(gray_pixel(&r, 0, 0), 30.0);
    assert_eq!(gray_pixel(&r, 5, 5), 0.0);
    assert_eq!(gray_bilinear(&r, 0.0, 0.0), 30.0);
}

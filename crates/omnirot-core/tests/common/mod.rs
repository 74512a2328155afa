#![allow(dead_code)]

use std::f64::consts::TAU;

use omnirot_core::raster::Raster;
use omnirot_core::registration::Region;

/// 1 pixel = 1 degree in both directions.
pub const TEST_WIDTH: usize = 360;
pub const TEST_HEIGHT: usize = 180;

/// 10 pixels per degree of azimuth; 2 degrees per row.
pub const FINE_WIDTH: usize = 3600;
pub const FINE_HEIGHT: usize = 90;

/// Build an RGB raster with the same value in every channel.
pub fn gray_raster(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Raster {
    let mut bytes = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        for col in 0..width {
            let g = f(col, row);
            bytes.extend_from_slice(&[g, g, g]);
        }
    }
    Raster::from_raw(width, height, 3, bytes).unwrap()
}

/// Gray level varying only with azimuth: `128 + 100 sin(2 theta)`.
///
/// A rotation about the vertical axis shifts this pattern horizontally, and
/// on a 360-wide image by whole pixels for whole-degree angles.
pub fn azimuth_pattern(width: usize, height: usize) -> Raster {
    gray_raster(width, height, |col, _| {
        let theta = (col as f64 - width as f64 / 2.0) * TAU / width as f64;
        (128.0 + 100.0 * (2.0 * theta).sin()).round() as u8
    })
}

/// Deterministic noise with independent channels.
pub fn textured_raster(width: usize, height: usize, channels: usize) -> Raster {
    let mut state: u32 = 0x2545_f491;
    let bytes = (0..width * height * channels)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    Raster::from_raw(width, height, channels, bytes).unwrap()
}

/// Band around the equator, well away from the seam for rotations of a few
/// tens of degrees.
pub fn test_region() -> Region {
    Region::new(120, 60, 239, 119)
}

/// [`test_region`] at [`FINE_WIDTH`] x [`FINE_HEIGHT`], kept a row away from
/// the top and bottom edges.
pub fn fine_region() -> Region {
    Region::new(1200, 30, 2399, 59)
}

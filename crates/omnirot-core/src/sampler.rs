//! Pixel fetch with a black out-of-bounds policy.
//!
//! Spherical resampling routinely lands past the seam or the image edge, so a
//! coordinate outside the raster reads as black instead of failing.

use crate::raster::Raster;

const BLACK: [u8; 3] = [0, 0, 0];

/// RGB at integer `(u, v)`, or black when outside the raster.
pub fn fetch_pixel(raster: &Raster, u: i64, v: i64) -> [u8; 3] {
    if u < 0 || v < 0 || u >= raster.width() as i64 || v >= raster.height() as i64 {
        return BLACK;
    }
    raster.rgb(u as usize, v as usize)
}

/// Bilinear RGB at fractional `(u, v)`.
///
/// Neighbours are read through [`fetch_pixel`], so taps outside the raster
/// contribute black. Each channel is clamped to [0, 255] and rounded.
/// Non-finite coordinates, and any whose taps all fall outside, give black.
pub fn fetch_bilinear(raster: &Raster, u: f64, v: f64) -> [u8; 3] {
    let u0 = u.floor();
    let v0 = v.floor();
    // Bounds checked in f64 so the i64 casts below cannot saturate.
    let (w, h) = (raster.width() as f64, raster.height() as f64);
    if !(u0 >= -1.0 && u0 < w && v0 >= -1.0 && v0 < h) {
        return BLACK;
    }
    let du = u - u0;
    let dv = v - v0;
    let (u0, v0) = (u0 as i64, v0 as i64);

    let p00 = fetch_pixel(raster, u0, v0);
    let p01 = fetch_pixel(raster, u0, v0 + 1);
    let p10 = fetch_pixel(raster, u0 + 1, v0);
    let p11 = fetch_pixel(raster, u0 + 1, v0 + 1);

    let mut out = BLACK;
    for (c, value) in out.iter_mut().enumerate() {
        let blended = (1.0 - du) * (1.0 - dv) * p00[c] as f64
            + (1.0 - du) * dv * p01[c] as f64
            + du * (1.0 - dv) * p10[c] as f64
            + du * dv * p11[c] as f64;
        *value = blended.clamp(0.0, 255.0).round() as u8;
    }
    out
}

/// Grayscale intensity as the plain mean of R, G and B.
pub fn gray(rgb: [u8; 3]) -> f64 {
    (rgb[0] as f64 + rgb[1] as f64 + rgb[2] as f64) / 3.0
}

pub fn gray_pixel(raster: &Raster, u: i64, v: i64) -> f64 {
    gray(fetch_pixel(raster, u, v))
}

pub fn gray_bilinear(raster: &Raster, u: f64, v: f64) -> f64 {
    gray(fetch_bilinear(raster, u, v))
}

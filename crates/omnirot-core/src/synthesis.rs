//! Resampling an equirectangular image under a change of viewing direction.

use ndarray::{ArrayViewMut2, Axis};
use rayon::prelude::*;
use tracing::info;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::math::{Mat3, Triple};
use crate::raster::Raster;
use crate::rotation::{synthesis_rotation, GazeFraming};
use crate::sampler::fetch_bilinear;
use crate::sphere::Equirect;

/// Image seen after rotating the camera by `+psi_deg` about the vertical axis.
///
/// Each output direction is mapped through `R(-psi)` back into the input.
pub fn synthesize_rotated(input: &Raster, psi_deg: f64) -> Raster {
    let output = remap(input, &synthesis_rotation(psi_deg));
    info!(
        width = input.width(),
        height = input.height(),
        psi_deg,
        "Rotated image synthesized"
    );
    output
}

/// Gaze image: the output is centered on the framing's gaze direction.
///
/// Output direction `X'` samples the input at `R^T X'`, so the forward
/// direction `(0, 0, 1)` lands on the gaze point.
pub fn synthesize_gaze(input: &Raster, framing: &GazeFraming) -> Raster {
    let r = framing.matrix();
    let output = remap(input, &r.transpose());
    info!(
        width = input.width(),
        height = input.height(),
        framing = %framing,
        gaze = %Triple(&framing.gaze()),
        "Gaze image synthesized"
    );
    output
}

/// Fill a raster shaped like `input` with `input` sampled at `to_input * X'`
/// for every output direction `X'`.
pub fn remap(input: &Raster, to_input: &Mat3) -> Raster {
    let geometry = Equirect::new(input.width(), input.height());
    let mut output = Raster::zeros_like(input);

    if input.width() * input.height() >= PARALLEL_PIXEL_THRESHOLD {
        output
            .data
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(row, line)| fill_row(input, &geometry, to_input, row, line));
    } else {
        output
            .data
            .axis_iter_mut(Axis(0))
            .enumerate()
            .for_each(|(row, line)| fill_row(input, &geometry, to_input, row, line));
    }

    output
}

fn fill_row(
    input: &Raster,
    geometry: &Equirect,
    to_input: &Mat3,
    row: usize,
    mut line: ArrayViewMut2<u8>,
) {
    let alpha = input.has_alpha();
    for col in 0..geometry.width {
        let x_out = geometry.pixel_to_world(col as f64, row as f64);
        let (u, v) = geometry.world_to_pixel(to_input * x_out);

        let rgb = fetch_bilinear(input, u, v);
        line[[col, 0]] = rgb[0];
        line[[col, 1]] = rgb[1];
        line[[col, 2]] = rgb[2];

        if alpha {
            line[[col, 3]] = nearest_alpha(input, u, v);
        }
    }
}

fn nearest_alpha(input: &Raster, u: f64, v: f64) -> u8 {
    let (u, v) = (u.round(), v.round());
    if u < 0.0 || v < 0.0 || u >= input.width() as f64 || v >= input.height() as f64 {
        return 0;
    }
    input.data[[v as usize, u as usize, 3]]
}

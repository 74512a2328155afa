//! Photometric registration energy for a rotation about the vertical axis.
//!
//! For every pixel `X` of a region in the base image the candidate rotation
//! `R(psi)` gives `X' = R(psi) X` in the reference image, and
//!
//! ```text
//! E(psi)     = 1/(2N) * sum (S_ref(X') - S_base(X))^2
//! dE/dpsi    = 1/N    * sum (S_ref(X') - S_base(X)) * (grad S_ref . dX'/dpsi)
//! ```
//!
//! with `S` the grayscale intensity and `psi` in radians for the derivative.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_REGION_U_MAX, DEFAULT_REGION_U_MIN, DEFAULT_REGION_V_MAX, DEFAULT_REGION_V_MIN,
    PARALLEL_PIXEL_THRESHOLD, POLE_SIN_FLOOR,
};
use crate::error::{OmniError, Result};
use crate::math::Vec3;
use crate::raster::Raster;
use crate::rotation::{forward_rotation, y_rotation_derivative};
use crate::sampler::{gray_bilinear, gray_pixel};
use crate::sphere::{world_to_angle, Equirect, SphericalAngle};

/// Inclusive rectangle of base-image pixels to compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub u_min: i64,
    pub v_min: i64,
    pub u_max: i64,
    pub v_max: i64,
}

impl Region {
    pub fn new(u_min: i64, v_min: i64, u_max: i64, v_max: i64) -> Self {
        Self {
            u_min,
            v_min,
            u_max,
            v_max,
        }
    }

    /// Region covering the whole image.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width as i64 - 1, height as i64 - 1)
    }

    /// Columns in the region, 0 when inverted.
    pub fn width(&self) -> usize {
        inclusive_span(self.u_min, self.u_max)
    }

    /// Rows in the region, 0 when inverted.
    pub fn height(&self) -> usize {
        inclusive_span(self.v_min, self.v_max)
    }

    /// Saturates at `usize::MAX`.
    pub fn pixel_count(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Whether every pixel of the region lies inside a `width` x `height` image.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        !self.is_empty()
            && self.u_min >= 0
            && self.v_min >= 0
            && self.u_max < width as i64
            && self.v_max < height as i64
    }
}

/// Count of integers in `lo..=hi`, saturating at `usize::MAX`.
fn inclusive_span(lo: i64, hi: i64) -> usize {
    if hi < lo {
        return 0;
    }
    usize::try_from(i128::from(hi) - i128::from(lo) + 1).unwrap_or(usize::MAX)
}

impl Default for Region {
    fn default() -> Self {
        Self::new(
            DEFAULT_REGION_U_MIN,
            DEFAULT_REGION_V_MIN,
            DEFAULT_REGION_U_MAX,
            DEFAULT_REGION_V_MAX,
        )
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) - ({}, {})",
            self.u_min, self.v_min, self.u_max, self.v_max
        )
    }
}

/// Registration energy `E(psi)` for a candidate angle in degrees.
///
/// The base image is read at its integer pixels and the reference bilinearly.
/// Pixels mapped outside the reference read as black.
pub fn objective(
    base: &Raster,
    reference: &Raster,
    psi_deg: f64,
    region: &Region,
) -> Result<f64> {
    let (geometry, n) = prepare(base, reference, region)?;
    let r = forward_rotation(psi_deg);

    let sum = sum_over_region(region, |u, v| {
        let x = geometry.pixel_to_world(u as f64, v as f64);
        let (u_ref, v_ref) = geometry.world_to_pixel(r * x);
        let diff = gray_bilinear(reference, u_ref, v_ref) - gray_pixel(base, u, v);
        diff * diff
    });

    Ok(sum / (2.0 * n as f64))
}

/// Closed-form `dE/dpsi` (per radian) at `psi_deg`.
///
/// Image derivatives of the reference are one-pixel central differences
/// converted to angular derivatives, then carried to world coordinates by the
/// spherical Jacobian at the mapped point. The sum is divided by `N`.
pub fn analytical_gradient(
    base: &Raster,
    reference: &Raster,
    psi_deg: f64,
    region: &Region,
) -> Result<f64> {
    let (geometry, n) = prepare(base, reference, region)?;
    let r = forward_rotation(psi_deg);
    let dr = y_rotation_derivative(psi_deg);

    let sum = sum_over_region(region, |u, v| {
        let x = geometry.pixel_to_world(u as f64, v as f64);
        let x_rot = r * x;
        let dx_dpsi = dr * x;

        let angle = world_to_angle(x_rot);
        let (u_ref, v_ref) = geometry.angle_to_pixel_f64(angle);
        let diff = gray_bilinear(reference, u_ref, v_ref) - gray_pixel(base, u, v);

        let (ds_dtheta, ds_dphi) = angular_derivatives(reference, &geometry, u_ref, v_ref);
        let jacobian = SphericalJacobian::at(angle);
        let grad = jacobian.dtheta * ds_dtheta + jacobian.dphi * ds_dphi;

        diff * grad.dot(&dx_dpsi)
    });

    Ok(sum / n as f64)
}

/// Forward-difference `dE/dpsi` (per radian).
///
/// `delta_psi_deg` is given in degrees like `psi_deg`; the quotient is taken
/// in radians so it is comparable to [`analytical_gradient`].
pub fn numerical_gradient(
    base: &Raster,
    reference: &Raster,
    psi_deg: f64,
    delta_psi_deg: f64,
    region: &Region,
) -> Result<f64> {
    if delta_psi_deg == 0.0 || !delta_psi_deg.is_finite() {
        return Err(OmniError::InvalidParameter(format!(
            "gradient step must be finite and non-zero, got {delta_psi_deg}"
        )));
    }

    let e0 = objective(base, reference, psi_deg, region)?;
    let e1 = objective(base, reference, psi_deg + delta_psi_deg, region)?;

    Ok((e1 - e0) / delta_psi_deg.to_radians())
}

/// Partial derivatives of the spherical angles on the unit sphere.
///
/// `dtheta` is `(cos t, 0, -sin t) / sin p` and `dphi` is
/// `(cos p sin t, -sin p, cos p cos t)`. `|sin p|` is floored at
/// [`POLE_SIN_FLOOR`] to keep the theta row finite at the poles.
#[derive(Clone, Copy, Debug)]
pub struct SphericalJacobian {
    pub dtheta: Vec3,
    pub dphi: Vec3,
}

impl SphericalJacobian {
    pub fn at(angle: SphericalAngle) -> Self {
        let (sin_theta, cos_theta) = angle.theta.sin_cos();
        let (mut sin_phi, cos_phi) = angle.phi.sin_cos();
        if sin_phi.abs() < POLE_SIN_FLOOR {
            sin_phi = if sin_phi >= 0.0 {
                POLE_SIN_FLOOR
            } else {
                -POLE_SIN_FLOOR
            };
        }

        Self {
            dtheta: Vec3::new(cos_theta / sin_phi, 0.0, -sin_theta / sin_phi),
            dphi: Vec3::new(cos_phi * sin_theta, -sin_phi, cos_phi * cos_theta),
        }
    }
}

/// `(dS/dtheta, dS/dphi)` of the reference at fractional pixel `(u, v)`.
///
/// `phi` decreases as `v` grows (`dv/dphi = -H/pi`), hence the sign flip on
/// the vertical difference.
fn angular_derivatives(reference: &Raster, geometry: &Equirect, u: f64, v: f64) -> (f64, f64) {
    let s_u_plus = gray_bilinear(reference, u + 1.0, v);
    let s_u_minus = gray_bilinear(reference, u - 1.0, v);
    let ds_dtheta = (s_u_plus - s_u_minus) / (2.0 * geometry.theta_step());

    let s_v_plus = gray_bilinear(reference, u, v + 1.0);
    let s_v_minus = gray_bilinear(reference, u, v - 1.0);
    let ds_dv = (s_v_plus - s_v_minus) / 2.0;
    let ds_dphi = -ds_dv / geometry.phi_step();

    (ds_dtheta, ds_dphi)
}

fn prepare(base: &Raster, reference: &Raster, region: &Region) -> Result<(Equirect, usize)> {
    if !base.same_size(reference) {
        return Err(OmniError::DimensionMismatch {
            base_width: base.width(),
            base_height: base.height(),
            ref_width: reference.width(),
            ref_height: reference.height(),
        });
    }

    let n = region.pixel_count();
    if n == 0 {
        return Err(OmniError::EmptyRegion {
            u_min: region.u_min,
            v_min: region.v_min,
            u_max: region.u_max,
            v_max: region.v_max,
        });
    }

    Ok((Equirect::new(base.width(), base.height()), n))
}

/// Sum `f(u, v)` over every pixel of a non-empty region.
///
/// Rows are summed in parallel once the region is large enough.
fn sum_over_region<F>(region: &Region, f: F) -> f64
where
    F: Fn(i64, i64) -> f64 + Sync,
{
    let row_sum = |v: i64| (region.u_min..=region.u_max).map(|u| f(u, v)).sum::<f64>();

    if region.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        (region.v_min..region.v_max + 1)
            .into_par_iter()
            .map(row_sum)
            .sum()
    } else {
        (region.v_min..=region.v_max).map(row_sum).sum()
    }
}

//! Equirectangular coordinate systems.
//!
//! Three coordinate systems are used throughout:
//! - image coordinates `(u, v)`: origin top-left, `u` to the right, `v` down;
//! - angle coordinates `(theta, phi)`: azimuth `theta` in (-pi, pi], polar
//!   angle `phi` in [0, pi] measured from the +Y pole;
//! - world coordinates `(X, Y, Z)`: points on the unit sphere, `theta = 0`
//!   along +Z.
//!
//! Pixel `(W/2, H/2)` is the forward direction `(0, 0, 1)` on the equator.

use std::f64::consts::{PI, TAU};

use crate::math::Vec3;

/// Spherical angle pair in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SphericalAngle {
    /// Azimuth, (-pi, pi].
    pub theta: f64,
    /// Polar angle from the +Y pole, [0, pi].
    pub phi: f64,
}

impl SphericalAngle {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }
}

/// Pixel grid of an equirectangular image of the given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Equirect {
    pub width: usize,
    pub height: usize,
}

impl Equirect {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Angular size of one pixel column (theta step).
    pub fn theta_step(&self) -> f64 {
        TAU / self.width as f64
    }

    /// Angular size of one pixel row (phi step).
    pub fn phi_step(&self) -> f64 {
        PI / self.height as f64
    }

    /// theta = (u - W/2) * 2pi/W, phi = -(v - H) * pi/H
    pub fn pixel_to_angle(&self, u: f64, v: f64) -> SphericalAngle {
        let w = self.width as f64;
        let h = self.height as f64;
        SphericalAngle {
            theta: (u - w / 2.0) * TAU / w,
            phi: -(v - h) * PI / h,
        }
    }

    /// Inverse of [`Equirect::pixel_to_angle`] without clamping. Results may
    /// fall outside the image; samplers apply their own boundary policy.
    pub fn angle_to_pixel_f64(&self, angle: SphericalAngle) -> (f64, f64) {
        let w = self.width as f64;
        let h = self.height as f64;
        let u = (angle.theta + PI) * w / TAU;
        let v = -(angle.phi - PI) * h / PI;
        (u, v)
    }

    /// Integer pixel for an angle, truncated and clamped into the image.
    pub fn angle_to_pixel(&self, angle: SphericalAngle) -> (usize, usize) {
        let (u, v) = self.angle_to_pixel_f64(angle);
        let max_u = self.width.saturating_sub(1) as f64;
        let max_v = self.height.saturating_sub(1) as f64;
        (u.trunc().clamp(0.0, max_u) as usize, v.trunc().clamp(0.0, max_v) as usize)
    }

    pub fn pixel_to_world(&self, u: f64, v: f64) -> Vec3 {
        angle_to_world(self.pixel_to_angle(u, v))
    }

    /// World direction to (unclamped) fractional pixel coordinates.
    pub fn world_to_pixel(&self, xyz: Vec3) -> (f64, f64) {
        self.angle_to_pixel_f64(world_to_angle(xyz))
    }
}

/// X = sin(phi) sin(theta), Y = cos(phi), Z = sin(phi) cos(theta)
pub fn angle_to_world(angle: SphericalAngle) -> Vec3 {
    let (sin_phi, cos_phi) = angle.phi.sin_cos();
    let (sin_theta, cos_theta) = angle.theta.sin_cos();
    Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
}

/// theta = atan2(X, Z), phi = acos(Y).
///
/// `Y` is clamped to [-1, 1] first so rounding overshoot at the poles snaps
/// `phi` to 0 or pi instead of producing NaN. Non-unit input must be
/// normalized by the caller.
pub fn world_to_angle(xyz: Vec3) -> SphericalAngle {
    SphericalAngle {
        theta: xyz.x.atan2(xyz.z),
        phi: xyz.y.clamp(-1.0, 1.0).acos(),
    }
}

//! Rotation about the vertical (Y) axis by a single angle.
//!
//! The objective maps base directions forward through `R(psi)` into the
//! reference image. Synthesizing the image seen after turning the camera by
//! `+psi` needs the opposite direction, `R(-psi)`, applied to each output
//! pixel. Both go through [`y_rotation`].

use crate::math::Mat3;

/// ```text
/// R(psi) = [ cos  0  -sin ]
///          [  0   1    0  ]
///          [ sin  0   cos ]
/// ```
/// with `psi` given in degrees.
pub fn y_rotation(psi_deg: f64) -> Mat3 {
    let (s, c) = psi_deg.to_radians().sin_cos();
    Mat3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Derivative of [`y_rotation`] with respect to the angle in radians.
///
/// Applied to `X` this gives `(dX'/dpsi, dY'/dpsi, dZ'/dpsi)`; the middle row
/// is zero because `Y' = Y`.
pub fn y_rotation_derivative(psi_deg: f64) -> Mat3 {
    let (s, c) = psi_deg.to_radians().sin_cos();
    Mat3::new(-s, 0.0, -c, 0.0, 0.0, 0.0, c, 0.0, -s)
}

/// Rotation taking a base-image direction to the reference image for a
/// candidate alignment angle.
pub fn forward_rotation(psi_deg: f64) -> Mat3 {
    y_rotation(psi_deg)
}

/// Rotation taking an output-pixel direction back to the input image when
/// synthesizing a view rotated by `psi_deg`.
pub fn synthesis_rotation(psi_deg: f64) -> Mat3 {
    y_rotation(-psi_deg)
}

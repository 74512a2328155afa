//! Orthonormal rotation frames built from a gaze direction.
//!
//! Both constructions place the basis vectors `ex`, `ey`, `ez` in the ROWS of
//! the matrix, with `ez` along the gaze. `R * X` expresses a world direction
//! in the gaze frame and `R^T * X'` maps a gaze-frame direction back to the
//! world.

use tracing::{debug, warn};

use crate::consts::{DEGENERATE_NORM, ROTATION_TOLERANCE};
use crate::math::{self, Mat3, Triple, Vec3};

/// How the roll about the gaze axis is fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GazeFraming {
    /// Use the fixed world up vector `(0, 1, 0)`.
    SinglePoint { gaze: Vec3 },
    /// Use an auxiliary point to the right of the gaze point.
    TwoPoint { gaze: Vec3, auxiliary: Vec3 },
}

impl GazeFraming {
    pub fn gaze(&self) -> Vec3 {
        match self {
            Self::SinglePoint { gaze } | Self::TwoPoint { gaze, .. } => *gaze,
        }
    }

    pub fn matrix(&self) -> Mat3 {
        match self {
            Self::SinglePoint { gaze } => single_point_frame(*gaze),
            Self::TwoPoint { gaze, auxiliary } => two_point_frame(*gaze, *auxiliary),
        }
    }
}

impl std::fmt::Display for GazeFraming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinglePoint { .. } => write!(f, "Single Point"),
            Self::TwoPoint { .. } => write!(f, "Two Point"),
        }
    }
}

/// Frame with `ez = N[G]`, `ex = N[up x ez]`, `ey = N[ez x ex]`.
///
/// `up` is `(0, 1, 0)`; when the gaze is (anti)parallel to it, `(1, 0, 0)` is
/// used instead.
pub fn single_point_frame(gaze: Vec3) -> Mat3 {
    let ez = math::normalize(&gaze);

    let mut cross = Vec3::y().cross(&ez);
    if cross.norm() < DEGENERATE_NORM {
        debug!("gaze parallel to world up, using X axis as reference");
        cross = Vec3::x().cross(&ez);
    }
    let ex = math::normalize(&cross);
    let ey = math::normalize(&ez.cross(&ex));

    math::from_rows(&ex, &ey, &ez)
}

/// Frame with `ez = N[G]`, `ey = N[G x Gs]`, `ex = ey x ez`.
///
/// There is no fallback here: an auxiliary point collinear with the gaze
/// leaves `ey` and `ex` at zero and the result fails [`verify_rotation`].
pub fn two_point_frame(gaze: Vec3, auxiliary: Vec3) -> Mat3 {
    let ez = math::normalize(&gaze);
    let ey = match math::try_unit(&gaze.cross(&auxiliary)) {
        Some(ey) => ey,
        None => {
            warn!(
                gaze = %Triple(&gaze),
                auxiliary = %Triple(&auxiliary),
                "auxiliary point is collinear with the gaze"
            );
            Vec3::zeros()
        }
    };
    let ex = ey.cross(&ez);

    math::from_rows(&ex, &ey, &ez)
}

/// Detailed orthonormality report for a row-basis rotation matrix.
#[derive(Clone, Debug)]
pub struct RotationCheck {
    /// Norms of `ex`, `ey`, `ez`.
    pub row_norms: [f64; 3],
    /// `ex.ey`, `ey.ez`, `ez.ex`.
    pub row_dots: [f64; 3],
    /// Component-wise `|ex x ey - ez|`.
    pub handedness_error: [f64; 3],
    pub determinant: f64,
}

impl RotationCheck {
    pub fn of(r: &Mat3) -> Self {
        let ex = math::row(r, 0);
        let ey = math::row(r, 1);
        let ez = math::row(r, 2);
        let cross = ex.cross(&ey);
        Self {
            row_norms: [ex.norm(), ey.norm(), ez.norm()],
            row_dots: [ex.dot(&ey), ey.dot(&ez), ez.dot(&ex)],
            handedness_error: [
                (cross.x - ez.x).abs(),
                (cross.y - ez.y).abs(),
                (cross.z - ez.z).abs(),
            ],
            determinant: r.determinant(),
        }
    }

    pub fn unit_rows(&self) -> bool {
        self.row_norms
            .iter()
            .all(|n| (n - 1.0).abs() < ROTATION_TOLERANCE)
    }

    pub fn orthogonal(&self) -> bool {
        self.row_dots.iter().all(|d| d.abs() < ROTATION_TOLERANCE)
    }

    pub fn right_handed(&self) -> bool {
        self.handedness_error
            .iter()
            .all(|e| *e < ROTATION_TOLERANCE)
    }

    pub fn is_valid(&self) -> bool {
        self.unit_rows() && self.orthogonal() && self.right_handed()
    }
}

/// Check that `r` has unit, pairwise-orthogonal rows with `ex x ey = ez`.
pub fn verify_rotation(r: &Mat3) -> bool {
    RotationCheck::of(r).is_valid()
}

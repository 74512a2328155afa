//! 3-vector and 3x3 matrix types used by the spherical geometry.
//!
//! Plain aliases over nalgebra, plus the few helpers the frame builders need:
//! zero-on-degenerate normalization, row access as column vectors, and a
//! single-line vector format for logs and summaries.

use std::fmt;

use nalgebra::{Matrix3, Vector3};

use crate::consts::DEGENERATE_NORM;

pub type Vec3 = Vector3<f64>;
pub type Mat3 = Matrix3<f64>;

/// Unit vector along `v`, or `None` when `|v| <= DEGENERATE_NORM`.
pub fn try_unit(v: &Vec3) -> Option<Vec3> {
    v.try_normalize(DEGENERATE_NORM)
}

/// Unit vector along `v`, or the zero vector when `v` is degenerate.
pub fn normalize(v: &Vec3) -> Vec3 {
    try_unit(v).unwrap_or_else(Vec3::zeros)
}

/// Matrix whose rows are `r0`, `r1`, `r2`.
pub fn from_rows(r0: &Vec3, r1: &Vec3, r2: &Vec3) -> Mat3 {
    Mat3::from_rows(&[r0.transpose(), r1.transpose(), r2.transpose()])
}

/// Row `i` of `m` as a column vector.
pub fn row(m: &Mat3, i: usize) -> Vec3 {
    m.row(i).transpose()
}

/// Largest absolute element-wise difference between two matrices.
pub fn max_difference(a: &Mat3, b: &Mat3) -> f64 {
    (a - b).abs().max()
}

/// Formats a vector as `(x, y, z)` with six decimals.
pub struct Triple<'a>(pub &'a Vec3);

impl fmt::Display for Triple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.0.x, self.0.y, self.0.z)
    }
}

/// Formats a matrix one row per line, each as `[a b c]`.
pub struct Rows<'a>(pub &'a Mat3);

impl fmt::Display for Rows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..3 {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:10.6} {:10.6} {:10.6}]",
                self.0[(i, 0)],
                self.0[(i, 1)],
                self.0[(i, 2)]
            )?;
        }
        Ok(())
    }
}

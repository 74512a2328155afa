/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Vectors shorter than this are treated as degenerate when normalizing.
pub const DEGENERATE_NORM: f64 = 1e-10;

/// Floor applied to |sin(phi)| in the spherical Jacobian near the poles.
pub const POLE_SIN_FLOOR: f64 = 1e-8;

/// Tolerance used when checking that a matrix is an orthonormal rotation.
pub const ROTATION_TOLERANCE: f64 = 1e-6;

/// Default comparison region (inclusive) for the 6080x3040 reference captures.
pub const DEFAULT_REGION_U_MIN: i64 = 2850;
pub const DEFAULT_REGION_V_MIN: i64 = 1425;
pub const DEFAULT_REGION_U_MAX: i64 = 3229;
pub const DEFAULT_REGION_V_MAX: i64 = 1614;

/// Default expected rotation angle in degrees.
pub const DEFAULT_EXPECTED_ANGLE_DEG: f64 = 5.0;

/// Default half-width of the angle sweep around the expected angle, in degrees.
pub const DEFAULT_SWEEP_HALF_RANGE_DEG: f64 = 10.0;

/// Default angle sweep step in degrees. Also the default finite-difference step.
pub const DEFAULT_SWEEP_STEP_DEG: f64 = 0.1;

/// Upper bound on the number of angles a sweep may evaluate.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Default JPEG quality for synthesized images.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

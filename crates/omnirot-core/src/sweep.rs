//! Angle sweep: energy and gradient curves around an expected angle.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{
    DEFAULT_EXPECTED_ANGLE_DEG, DEFAULT_SWEEP_HALF_RANGE_DEG, DEFAULT_SWEEP_STEP_DEG,
    MAX_SWEEP_POINTS,
};
use crate::error::{OmniError, Result};
use crate::raster::Raster;
use crate::registration::{analytical_gradient, numerical_gradient, objective, Region};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Angle the sweep is centered on, in degrees.
    pub expected_angle_deg: f64,
    /// Sweep covers `expected +/- half_range`.
    pub half_range_deg: f64,
    pub step_deg: f64,
    /// Finite-difference step for the numerical gradient, in degrees.
    pub gradient_delta_deg: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            expected_angle_deg: DEFAULT_EXPECTED_ANGLE_DEG,
            half_range_deg: DEFAULT_SWEEP_HALF_RANGE_DEG,
            step_deg: DEFAULT_SWEEP_STEP_DEG,
            gradient_delta_deg: DEFAULT_SWEEP_STEP_DEG,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.step_deg.is_finite() && self.step_deg > 0.0) {
            return Err(OmniError::InvalidParameter(format!(
                "sweep step must be positive, got {}",
                self.step_deg
            )));
        }
        if !(self.half_range_deg.is_finite() && self.half_range_deg >= 0.0) {
            return Err(OmniError::InvalidParameter(format!(
                "sweep half range must be non-negative, got {}",
                self.half_range_deg
            )));
        }
        if self.gradient_delta_deg == 0.0 || !self.gradient_delta_deg.is_finite() {
            return Err(OmniError::InvalidParameter(format!(
                "gradient step must be finite and non-zero, got {}",
                self.gradient_delta_deg
            )));
        }
        let points = self.point_count();
        if points > MAX_SWEEP_POINTS as f64 {
            return Err(OmniError::InvalidParameter(format!(
                "sweep of +/-{} deg at step {} needs {} points, limit is {}",
                self.half_range_deg, self.step_deg, points, MAX_SWEEP_POINTS
            )));
        }
        Ok(())
    }

    pub fn start_deg(&self) -> f64 {
        self.expected_angle_deg - self.half_range_deg
    }

    pub fn end_deg(&self) -> f64 {
        self.expected_angle_deg + self.half_range_deg
    }

    /// Number of sampled angles, computed in floating point.
    pub fn point_count(&self) -> f64 {
        let span = self.end_deg() - self.start_deg();
        (span / self.step_deg + 1e-9).floor() + 1.0
    }

    /// Sampled angles from start to end inclusive, at most
    /// [`MAX_SWEEP_POINTS`] of them.
    pub fn angles(&self) -> Vec<f64> {
        let count = self.point_count().min(MAX_SWEEP_POINTS as f64) as usize;
        (0..count)
            .map(|i| self.start_deg() + i as f64 * self.step_deg)
            .collect()
    }
}

/// Energy and gradients at one sampled angle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    pub angle_deg: f64,
    pub energy: f64,
    pub analytical: f64,
    pub numerical: f64,
}

impl SweepSample {
    /// `|analytical - numerical| / |numerical|`, or `None` when the numerical
    /// gradient is zero.
    pub fn relative_gradient_error(&self) -> Option<f64> {
        if self.numerical == 0.0 {
            None
        } else {
            Some((self.analytical - self.numerical).abs() / self.numerical.abs())
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SweepResult {
    pub expected_angle_deg: f64,
    pub samples: Vec<SweepSample>,
}

impl SweepResult {
    /// Sample with the lowest energy.
    pub fn minimum(&self) -> Option<&SweepSample> {
        self.samples
            .iter()
            .min_by(|a, b| a.energy.total_cmp(&b.energy))
    }

    /// Angle where the analytical gradient first goes from negative to
    /// non-negative, linearly interpolated between the bracketing samples.
    pub fn gradient_zero_crossing(&self) -> Option<f64> {
        self.samples.windows(2).find_map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            if a.analytical < 0.0 && b.analytical >= 0.0 {
                let t = a.analytical / (a.analytical - b.analytical);
                Some(a.angle_deg + t * (b.angle_deg - a.angle_deg))
            } else {
                None
            }
        })
    }
}

/// Evaluate energy, analytical and numerical gradient at every sweep angle.
pub fn run_sweep(
    base: &Raster,
    reference: &Raster,
    region: &Region,
    config: &SweepConfig,
) -> Result<SweepResult> {
    run_sweep_with_progress(base, reference, region, config, |_, _| {})
}

/// Like [`run_sweep`], calling `on_progress(done, total)` after each angle.
pub fn run_sweep_with_progress<F>(
    base: &Raster,
    reference: &Raster,
    region: &Region,
    config: &SweepConfig,
    mut on_progress: F,
) -> Result<SweepResult>
where
    F: FnMut(usize, usize),
{
    config.validate()?;
    let angles = config.angles();
    let total = angles.len();

    info!(
        start = config.start_deg(),
        end = config.end_deg(),
        step = config.step_deg,
        points = total,
        region = %region,
        "Starting angle sweep"
    );

    let mut samples = Vec::with_capacity(total);
    for (i, psi) in angles.into_iter().enumerate() {
        let energy = objective(base, reference, psi, region)?;
        let analytical = analytical_gradient(base, reference, psi, region)?;
        let numerical =
            numerical_gradient(base, reference, psi, config.gradient_delta_deg, region)?;
        debug!(psi, energy, analytical, numerical, "sweep sample");

        samples.push(SweepSample {
            angle_deg: psi,
            energy,
            analytical,
            numerical,
        });
        on_progress(i + 1, total);
    }

    let result = SweepResult {
        expected_angle_deg: config.expected_angle_deg,
        samples,
    };
    if let Some(best) = result.minimum() {
        info!(
            angle_deg = best.angle_deg,
            energy = best.energy,
            "Angle sweep complete"
        );
    }
    Ok(result)
}

//! CSV and text output of an angle sweep.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::sweep::SweepResult;

pub const OBJECTIVE_CSV: &str = "objective_function.csv";
pub const DERIVATIVES_CSV: &str = "derivatives.csv";
pub const EXPECTED_ANGLE_TXT: &str = "expected_angle.txt";
pub const REGION_IMAGE: &str = "region_base.jpg";

/// Files written by [`write_sweep_report`].
#[derive(Clone, Debug)]
pub struct ReportPaths {
    pub objective: PathBuf,
    pub derivatives: PathBuf,
    pub expected_angle: PathBuf,
}

/// `angle_deg,objective_function`, one row per sample.
pub fn write_objective_csv(path: &Path, result: &SweepResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["angle_deg", "objective_function"])?;
    for s in &result.samples {
        wtr.write_record([format!("{:.2}", s.angle_deg), format!("{:.6}", s.energy)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `angle_deg,analytical_derivative,numerical_derivative`, one row per sample.
pub fn write_derivatives_csv(path: &Path, result: &SweepResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["angle_deg", "analytical_derivative", "numerical_derivative"])?;
    for s in &result.samples {
        wtr.write_record([
            format!("{:.2}", s.angle_deg),
            format!("{:.6}", s.analytical),
            format!("{:.6}", s.numerical),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// The expected angle as a single line with six decimals.
pub fn write_expected_angle(path: &Path, angle_deg: f64) -> Result<()> {
    fs::write(path, format!("{angle_deg:.6}\n"))?;
    Ok(())
}

/// Write all sweep outputs into `dir`, creating it if needed.
pub fn write_sweep_report(dir: &Path, result: &SweepResult) -> Result<ReportPaths> {
    fs::create_dir_all(dir)?;
    let paths = ReportPaths {
        objective: dir.join(OBJECTIVE_CSV),
        derivatives: dir.join(DERIVATIVES_CSV),
        expected_angle: dir.join(EXPECTED_ANGLE_TXT),
    };

    write_objective_csv(&paths.objective, result)?;
    write_derivatives_csv(&paths.derivatives, result)?;
    write_expected_angle(&paths.expected_angle, result.expected_angle_deg)?;

    info!(
        dir = %dir.display(),
        rows = result.samples.len(),
        "Sweep report written"
    );
    Ok(paths)
}

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use omnirot_core::config::RegistrationConfig;
use omnirot_core::io::image_io::{crop_region, load_raster, save_raster};
use omnirot_core::io::report::{write_sweep_report, REGION_IMAGE};
use omnirot_core::raster::Raster;
use omnirot_core::registration::Region;
use omnirot_core::sweep::run_sweep_with_progress;
use tracing::warn;

use crate::summary::print_sweep_summary;

#[derive(Args)]
pub struct SweepArgs {
    /// Base equirectangular image
    pub base: Option<PathBuf>,

    /// Reference image rotated relative to the base
    pub reference: Option<PathBuf>,

    /// Load settings from a TOML file (see `omnirot config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Expected rotation angle in degrees; the sweep is centered on it
    #[arg(short, long, allow_hyphen_values = true)]
    pub expected: Option<f64>,

    /// Half width of the sweep in degrees
    #[arg(long)]
    pub half_range: Option<f64>,

    /// Sweep step in degrees
    #[arg(long)]
    pub step: Option<f64>,

    /// Finite-difference step for the numerical gradient, in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub delta: Option<f64>,

    /// Comparison region as u_min,v_min,u_max,v_max (inclusive)
    #[arg(long, value_delimiter = ',', num_args = 4)]
    pub region: Option<Vec<i64>>,

    /// Directory for the CSV outputs
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: &SweepArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let base = load_raster(&config.base)
        .with_context(|| format!("Failed to load base image {}", config.base.display()))?;
    let reference = load_raster(&config.reference).with_context(|| {
        format!(
            "Failed to load reference image {}",
            config.reference.display()
        )
    })?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    save_region_image(&base, &config);

    let total = config.sweep.angles().len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Sweeping [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let result = run_sweep_with_progress(
        &base,
        &reference,
        &config.region,
        &config.sweep,
        |done, _| pb.set_position(done as u64),
    )?;
    pb.finish();

    let paths = write_sweep_report(&config.output_dir, &result)?;
    print_sweep_summary(&config, &result, &paths);
    Ok(())
}

/// Config file (or defaults) with command-line values layered on top.
fn resolve_config(args: &SweepArgs) -> Result<RegistrationConfig> {
    let mut config = match args.config {
        Some(ref path) => load_config(path)?,
        None => {
            if args.base.is_none() || args.reference.is_none() {
                bail!("Base and reference images are required without --config");
            }
            RegistrationConfig::default()
        }
    };

    if let Some(ref base) = args.base {
        config.base = base.clone();
    }
    if let Some(ref reference) = args.reference {
        config.reference = reference.clone();
    }
    if let Some(ref dir) = args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(expected) = args.expected {
        config.sweep.expected_angle_deg = expected;
    }
    if let Some(half_range) = args.half_range {
        config.sweep.half_range_deg = half_range;
    }
    if let Some(step) = args.step {
        config.sweep.step_deg = step;
    }
    if let Some(delta) = args.delta {
        config.sweep.gradient_delta_deg = delta;
    }
    if let Some(ref r) = args.region {
        config.region = Region::new(r[0], r[1], r[2], r[3]);
    }

    config.sweep.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<RegistrationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Crop of the comparison region, for visual inspection. Failure only warns.
fn save_region_image(base: &Raster, config: &RegistrationConfig) {
    let path = config.output_dir.join(REGION_IMAGE);
    let saved = crop_region(base, &config.region)
        .and_then(|crop| save_raster(&crop, &path, config.jpeg_quality));
    if let Err(e) = saved {
        warn!(path = %path.display(), error = %e, "Could not save region image");
    }
}

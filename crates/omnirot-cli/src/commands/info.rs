use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use omnirot_core::io::image_io::load_raster;
use omnirot_core::math::Triple;
use omnirot_core::sphere::Equirect;

#[derive(Args)]
pub struct InfoArgs {
    /// Input equirectangular image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let geometry = Equirect::new(raster.width(), raster.height());

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Channels:    {}", raster.channels());
    println!(
        "Resolution:  {:.4} deg/px (azimuth), {:.4} deg/px (polar)",
        geometry.theta_step().to_degrees(),
        geometry.phi_step().to_degrees()
    );

    let aspect = raster.width() as f64 / raster.height() as f64;
    if (aspect - 2.0).abs() > 1e-3 {
        println!("Warning:     aspect ratio {:.3} is not 2:1", aspect);
    }

    let (cu, cv) = (raster.width() / 2, raster.height() / 2);
    println!(
        "Forward:     pixel ({}, {}) -> {}",
        cu,
        cv,
        Triple(&geometry.pixel_to_world(cu as f64, cv as f64))
    );

    Ok(())
}

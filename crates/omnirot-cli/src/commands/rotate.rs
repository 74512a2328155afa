use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use omnirot_core::consts::{DEFAULT_EXPECTED_ANGLE_DEG, DEFAULT_JPEG_QUALITY};
use omnirot_core::io::image_io::{load_raster, save_raster};
use omnirot_core::synthesis::synthesize_rotated;

#[derive(Args)]
pub struct RotateArgs {
    /// Input equirectangular image
    pub input: PathBuf,

    /// Output image (format from extension)
    pub output: PathBuf,

    /// Rotation about the vertical axis in degrees
    #[arg(short, long, default_value_t = DEFAULT_EXPECTED_ANGLE_DEG, allow_hyphen_values = true)]
    pub angle: f64,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

pub fn run(args: &RotateArgs) -> Result<()> {
    let input = load_raster(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    println!(
        "Rotating {}x{} image by {:.2} deg...",
        input.width(),
        input.height(),
        args.angle
    );

    let rotated = synthesize_rotated(&input, args.angle);
    save_raster(&rotated, &args.output, args.quality)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());
    Ok(())
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use omnirot_core::consts::DEFAULT_JPEG_QUALITY;
use omnirot_core::io::image_io::{load_raster, save_raster};
use omnirot_core::rotation::{GazeFraming, RotationCheck};
use omnirot_core::sphere::Equirect;
use omnirot_core::synthesis::synthesize_gaze;

use crate::summary::print_rotation_check;

#[derive(Args)]
pub struct GazeArgs {
    /// Input equirectangular image
    pub input: PathBuf,

    /// Output gaze image (format from extension)
    pub output: PathBuf,

    /// Gaze point column
    pub u: f64,

    /// Gaze point row
    pub v: f64,

    /// Auxiliary point column; fixes the roll with the two-point frame
    #[arg(long, requires = "aux_v")]
    pub aux_u: Option<f64>,

    /// Auxiliary point row
    #[arg(long, requires = "aux_u")]
    pub aux_v: Option<f64>,

    /// JPEG quality (1-100)
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
    pub quality: u8,
}

/// Reject pixel coordinates outside `[0, width) x [0, height)`.
fn check_pixel(geometry: &Equirect, what: &str, u: f64, v: f64) -> Result<()> {
    let (w, h) = (geometry.width as f64, geometry.height as f64);
    if !(u >= 0.0 && u < w && v >= 0.0 && v < h) {
        bail!(
            "{} pixel ({}, {}) is outside the {}x{} image",
            what,
            u,
            v,
            geometry.width,
            geometry.height
        );
    }
    Ok(())
}

/// Build the framing for a gaze pixel and optional auxiliary pixel.
pub fn framing_for(
    geometry: &Equirect,
    u: f64,
    v: f64,
    aux: Option<(f64, f64)>,
) -> Result<GazeFraming> {
    check_pixel(geometry, "Gaze", u, v)?;
    let gaze = geometry.pixel_to_world(u, v);
    Ok(match aux {
        Some((au, av)) => {
            check_pixel(geometry, "Auxiliary", au, av)?;
            GazeFraming::TwoPoint {
                gaze,
                auxiliary: geometry.pixel_to_world(au, av),
            }
        }
        None => GazeFraming::SinglePoint { gaze },
    })
}

pub fn run(args: &GazeArgs) -> Result<()> {
    let input = load_raster(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    let geometry = Equirect::new(input.width(), input.height());

    let aux = args.aux_u.zip(args.aux_v);
    let framing = framing_for(&geometry, args.u, args.v, aux)?;
    let r = framing.matrix();
    let check = RotationCheck::of(&r);
    print_rotation_check(&framing, &r, &check);

    if !check.is_valid() {
        bail!("Rotation frame for gaze ({}, {}) is not orthonormal", args.u, args.v);
    }

    let output = synthesize_gaze(&input, &framing);
    save_raster(&output, &args.output, args.quality)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());
    Ok(())
}

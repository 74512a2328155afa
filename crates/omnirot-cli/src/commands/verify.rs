use anyhow::{bail, Result};
use clap::Args;
use omnirot_core::math::{self, Triple, Vec3};
use omnirot_core::rotation::RotationCheck;
use omnirot_core::sphere::Equirect;

use crate::commands::gaze::framing_for;
use crate::summary::print_rotation_check;

#[derive(Args)]
pub struct VerifyArgs {
    /// Gaze point column
    pub u: f64,

    /// Gaze point row
    pub v: f64,

    /// Auxiliary point column; selects the two-point frame
    #[arg(long, requires = "aux_v")]
    pub aux_u: Option<f64>,

    /// Auxiliary point row
    #[arg(long, requires = "aux_u")]
    pub aux_v: Option<f64>,

    /// Image width in pixels
    #[arg(long, default_value = "6080")]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value = "3040")]
    pub height: usize,
}

pub fn run(args: &VerifyArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("Image size must be non-zero, got {}x{}", args.width, args.height);
    }
    let geometry = Equirect::new(args.width, args.height);
    let framing = framing_for(&geometry, args.u, args.v, args.aux_u.zip(args.aux_v))?;
    let r = framing.matrix();
    let check = RotationCheck::of(&r);
    print_rotation_check(&framing, &r, &check);

    // The gaze should land on the forward axis of the frame.
    let forward = r * math::normalize(&framing.gaze());
    let miss = (forward - Vec3::z()).norm();
    println!("  R * gaze      {}  (|R*G - ez| = {:.2e})", Triple(&forward), miss);

    if !check.is_valid() {
        bail!("Rotation frame is not orthonormal");
    }
    Ok(())
}

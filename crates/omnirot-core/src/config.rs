use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_JPEG_QUALITY;
use crate::registration::Region;
use crate::sweep::SweepConfig;

/// Inputs and parameters of a registration sweep, as stored in TOML.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Base (unrotated) equirectangular image.
    pub base: PathBuf,
    /// Reference image, rotated about the vertical axis relative to `base`.
    pub reference: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// JPEG quality for images written alongside the sweep.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub sweep: SweepConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}
fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("images/base/base.jpg"),
            reference: PathBuf::from("images/reference/reference.jpg"),
            output_dir: default_output_dir(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            region: Region::default(),
            sweep: SweepConfig::default(),
        }
    }
}

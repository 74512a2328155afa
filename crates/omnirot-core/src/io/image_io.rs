use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat, RgbImage, RgbaImage};
use ndarray::s;
use tracing::debug;

use crate::error::{OmniError, Result};
use crate::raster::Raster;
use crate::registration::Region;

/// Load an image file as an 8-bit raster.
///
/// Images with an alpha channel keep it (RGBA), everything else is converted
/// to RGB.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let (w, h) = (img.width() as usize, img.height() as usize);

    let raster = if img.color().has_alpha() {
        Raster::from_raw(w, h, 4, img.to_rgba8().into_raw())?
    } else {
        Raster::from_raw(w, h, 3, img.to_rgb8().into_raw())?
    };

    debug!(
        path = %path.display(),
        width = w,
        height = h,
        channels = raster.channels(),
        "Loaded image"
    );
    Ok(raster)
}

/// Save as baseline JPEG at the given quality (1-100). Alpha is dropped.
pub fn save_jpeg(raster: &Raster, path: &Path, quality: u8) -> Result<()> {
    let rgb = rgb_bytes(raster);
    let writer = BufWriter::new(File::create(path)?);
    let mut encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    encoder.encode(
        &rgb,
        raster.width() as u32,
        raster.height() as u32,
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Save as 8-bit PNG, RGBA when the raster carries alpha.
pub fn save_png(raster: &Raster, path: &Path) -> Result<()> {
    to_dynamic(raster)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a raster, choosing format from file extension.
pub fn save_raster(raster: &Raster, path: &Path, jpeg_quality: u8) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => save_jpeg(raster, path, jpeg_quality)?,
        _ => save_png(raster, path)?,
    }
    debug!(path = %path.display(), "Saved image");
    Ok(())
}

/// Copy the pixels of an inclusive region into a new raster.
pub fn crop_region(raster: &Raster, region: &Region) -> Result<Raster> {
    if region.is_empty() {
        return Err(OmniError::EmptyRegion {
            u_min: region.u_min,
            v_min: region.v_min,
            u_max: region.u_max,
            v_max: region.v_max,
        });
    }
    if !region.fits(raster.width(), raster.height()) {
        return Err(OmniError::InvalidParameter(format!(
            "region {region} exceeds image bounds {}x{}",
            raster.width(),
            raster.height()
        )));
    }

    let (u0, v0) = (region.u_min as usize, region.v_min as usize);
    let (u1, v1) = (region.u_max as usize, region.v_max as usize);
    let data = raster.data.slice(s![v0..=v1, u0..=u1, ..]).to_owned();
    Raster::new(data)
}

fn rgb_bytes(raster: &Raster) -> Vec<u8> {
    if raster.has_alpha() {
        raster.data.slice(s![.., .., 0..3]).iter().copied().collect()
    } else {
        raster.as_raw()
    }
}

fn to_dynamic(raster: &Raster) -> Result<DynamicImage> {
    let (w, h) = (raster.width() as u32, raster.height() as u32);
    let invalid = || OmniError::InvalidDimensions {
        width: raster.width(),
        height: raster.height(),
    };

    if raster.has_alpha() {
        RgbaImage::from_raw(w, h, raster.as_raw())
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(invalid)
    } else {
        RgbImage::from_raw(w, h, raster.as_raw())
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(invalid)
    }
}

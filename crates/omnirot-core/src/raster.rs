use ndarray::Array3;

use crate::error::{OmniError, Result};

/// An 8-bit interleaved raster image.
///
/// Shape is `(height, width, channels)` in standard layout, so the raw byte
/// for `(row, col, ch)` lives at `(row * width + col) * channels + ch`.
/// Channels are RGB or RGBA.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    pub data: Array3<u8>,
}

impl Raster {
    /// Wrap an existing array, validating its channel count.
    pub fn new(data: Array3<u8>) -> Result<Self> {
        let (h, w, c) = data.dim();
        check_shape(w, h, c)?;
        Ok(Self { data })
    }

    /// All-black raster of the given shape.
    pub fn zeros(width: usize, height: usize, channels: usize) -> Result<Self> {
        check_shape(width, height, channels)?;
        Ok(Self {
            data: Array3::zeros((height, width, channels)),
        })
    }

    /// All-black raster with the same shape as `other`.
    pub fn zeros_like(other: &Raster) -> Self {
        Self {
            data: Array3::zeros(other.data.dim()),
        }
    }

    /// Build from row-major interleaved bytes.
    pub fn from_raw(width: usize, height: usize, channels: usize, bytes: Vec<u8>) -> Result<Self> {
        check_shape(width, height, channels)?;
        let expected = width * height * channels;
        if bytes.len() != expected {
            return Err(OmniError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, channels), bytes).map_err(|_| {
            OmniError::InvalidDimensions { width, height }
        })?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn has_alpha(&self) -> bool {
        self.channels() == 4
    }

    /// Interleaved bytes in row-major order.
    pub fn as_raw(&self) -> Vec<u8> {
        match self.data.as_slice() {
            Some(s) => s.to_vec(),
            None => self.data.iter().copied().collect(),
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec_and_offset().0
        } else {
            self.data.iter().copied().collect()
        }
    }

    /// RGB of an in-bounds pixel.
    pub fn rgb(&self, col: usize, row: usize) -> [u8; 3] {
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        ]
    }

    /// Write RGB of an in-bounds pixel; alpha, if any, is left untouched.
    pub fn set_rgb(&mut self, col: usize, row: usize, rgb: [u8; 3]) {
        for (ch, value) in rgb.into_iter().enumerate() {
            self.data[[row, col, ch]] = value;
        }
    }

    pub fn same_size(&self, other: &Raster) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }
}

fn check_shape(width: usize, height: usize, channels: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(OmniError::InvalidDimensions { width, height });
    }
    if channels != 3 && channels != 4 {
        return Err(OmniError::UnsupportedChannels(channels));
    }
    Ok(())
}

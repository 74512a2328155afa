use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmniError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),

    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Image size mismatch: base {base_width}x{base_height} vs reference {ref_width}x{ref_height}")]
    DimensionMismatch {
        base_width: usize,
        base_height: usize,
        ref_width: usize,
        ref_height: usize,
    },

    #[error("Region ({u_min}, {v_min})-({u_max}, {v_max}) contains no pixels")]
    EmptyRegion {
        u_min: i64,
        v_min: i64,
        u_max: i64,
        v_max: i64,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, OmniError>;

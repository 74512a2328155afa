pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod math;
pub mod raster;
pub mod registration;
pub mod rotation;
pub mod sampler;
pub mod sphere;
pub mod sweep;
pub mod synthesis;

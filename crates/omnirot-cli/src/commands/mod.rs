pub mod config;
pub mod gaze;
pub mod info;
pub mod rotate;
pub mod sweep;
pub mod verify;

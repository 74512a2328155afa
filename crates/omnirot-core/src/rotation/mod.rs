pub mod axis;
pub mod frame;

pub use axis::{forward_rotation, synthesis_rotation, y_rotation, y_rotation_derivative};
pub use frame::{
    single_point_frame, two_point_frame, verify_rotation, GazeFraming, RotationCheck,
};

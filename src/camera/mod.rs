//! First-person camera: yaw/pitch orientation state, view/projection
//! matrices, and the GPU uniform resources that expose them to shaders.

/// Camera plus GPU uniform buffer and bind group.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform, MoveDirection};

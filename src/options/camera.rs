use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera placement, projection, and control parameters.
///
/// Defaults match the classic fly-camera tutorial: eye three units back
/// from the origin looking down -Z.
pub struct CameraOptions {
    /// Initial eye position in world space.
    pub position: [f32; 3],
    /// World up direction used for the view basis and strafing.
    pub world_up: [f32; 3],
    /// Initial yaw angle in degrees (-90 looks down -Z).
    pub yaw: f32,
    /// Initial pitch angle in degrees.
    pub pitch: f32,
    /// Initial vertical field of view in degrees.
    pub fov: f32,
    /// Pointer-delta to degrees gain.
    pub mouse_sensitivity: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            mouse_sensitivity: 0.1,
            movement_speed: 10.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

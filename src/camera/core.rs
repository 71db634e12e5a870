use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// Pitch is kept strictly inside the poles so the look direction never
/// flips past vertical.
const PITCH_LIMIT: f32 = 89.0;

/// Field-of-view bounds for scroll zoom, in degrees.
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;

/// Discrete movement directions driven by held keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Along the look direction.
    Forward,
    /// Against the look direction.
    Backward,
    /// Strafe left (against the right vector).
    Left,
    /// Strafe right (along the right vector).
    Right,
}

impl MoveDirection {
    /// All four directions, for iterating held-key state.
    pub const ALL: [Self; 4] =
        [Self::Forward, Self::Backward, Self::Left, Self::Right];
}

/// First-person camera defined by a world position and yaw/pitch Euler
/// angles.
///
/// The forward vector is derived from `(yaw, pitch)` and recomputed
/// whenever either angle changes; it is never set directly. Angles are in
/// degrees.
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// World up direction. Fixed at construction; movement never
    /// renormalizes it.
    pub up: Vec3,
    /// Pointer-delta to degrees gain.
    pub mouse_sensitivity: f32,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,

    // Derived state: forward always matches (yaw, pitch).
    yaw: f32,
    pitch: f32,
    forward: Vec3,
    fov: f32,
}

impl Camera {
    /// Create a camera from options and an initial aspect ratio.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(options.position),
            up: Vec3::from_array(options.world_up),
            mouse_sensitivity: options.mouse_sensitivity,
            movement_speed: options.movement_speed,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
            yaw: options.yaw,
            pitch: options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            forward: Vec3::NEG_Z,
            fov: options.fov.clamp(FOV_MIN, FOV_MAX),
        };
        camera.update_forward();
        camera
    }

    /// Current yaw angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current vertical field of view in degrees, always within [1, 45].
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.fov
    }

    /// Unit forward vector derived from the current yaw/pitch.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// World-to-camera transform built from position, look target, and up.
    ///
    /// Pure function of current state; call once per frame.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Perspective projection from the current fov and aspect ratio.
    ///
    /// `perspective_rh` already uses [0,1] depth range (wgpu/Vulkan
    /// convention).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined projection * view matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Apply a pointer-motion delta in input-device units.
    ///
    /// Both components are scaled by `mouse_sensitivity`; x turns (yaw),
    /// y tilts (pitch). With `clamp_pitch`, pitch is hard-clamped to
    /// ±89° so the view cannot invert past vertical. Yaw is unconstrained
    /// and wraps implicitly through the trigonometry.
    pub fn rotate(&mut self, delta: Vec2, clamp_pitch: bool) {
        self.yaw += delta.x * self.mouse_sensitivity;
        self.pitch += delta.y * self.mouse_sensitivity;

        if clamp_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_forward();
    }

    /// Apply a scroll delta to the field of view: `fov = clamp(fov - delta,
    /// 1, 45)`.
    pub fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov - delta).clamp(FOV_MIN, FOV_MAX);
    }

    /// Move the camera along its movement axes for `elapsed_seconds`.
    ///
    /// Forward/Backward move along ±forward; Left/Right strafe along
    /// ±normalize(forward × up).
    pub fn translate(
        &mut self,
        direction: MoveDirection,
        elapsed_seconds: f32,
    ) {
        let speed = self.movement_speed * elapsed_seconds;
        match direction {
            MoveDirection::Forward => self.position += self.forward * speed,
            MoveDirection::Backward => self.position -= self.forward * speed,
            MoveDirection::Left => {
                self.position -=
                    self.forward.cross(self.up).normalize() * speed;
            }
            MoveDirection::Right => {
                self.position +=
                    self.forward.cross(self.up).normalize() * speed;
            }
        }
    }

    /// Update the viewport aspect ratio after a resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Spherical-to-Cartesian conversion from the current Euler angles.
    fn update_forward(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.forward = Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        )
        .normalize();
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection().to_cols_array_2d();
        self.position = camera.position.to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3, Vec4};

    use super::{Camera, MoveDirection};
    use crate::options::CameraOptions;

    const EPS: f32 = 1e-5;

    fn test_camera() -> Camera {
        Camera::new(&CameraOptions::default(), 800.0 / 600.0)
    }

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_forward_is_negative_z() {
        let camera = test_camera();
        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
        assert_vec3_near(camera.forward(), Vec3::NEG_Z);
    }

    #[test]
    fn quarter_turn_right_faces_positive_x() {
        let mut camera = test_camera();
        camera.rotate(Vec2::new(90.0 / camera.mouse_sensitivity, 0.0), true);
        assert!(camera.yaw().abs() < 1e-3);
        assert_vec3_near(camera.forward(), Vec3::X);
    }

    #[test]
    fn pitch_clamps_at_poles() {
        let mut camera = test_camera();
        camera.rotate(Vec2::new(0.0, 500.0 / camera.mouse_sensitivity), true);
        assert_eq!(camera.pitch(), 89.0);

        camera
            .rotate(Vec2::new(0.0, -1000.0 / camera.mouse_sensitivity), true);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn unclamped_pitch_passes_the_poles() {
        let mut camera = test_camera();
        camera
            .rotate(Vec2::new(0.0, 120.0 / camera.mouse_sensitivity), false);
        assert!((camera.pitch() - 120.0).abs() < 1e-3);
    }

    #[test]
    fn forward_stays_unit_length() {
        let mut camera = test_camera();
        let deltas = [
            Vec2::new(37.5, -12.0),
            Vec2::new(-400.0, 250.0),
            Vec2::new(0.01, 0.01),
            Vec2::new(9999.0, -9999.0),
        ];
        for delta in deltas {
            camera.rotate(delta, true);
            assert!((camera.forward().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut camera = test_camera();
        camera.zoom(100.0);
        assert_eq!(camera.field_of_view(), 1.0);
        camera.zoom(-100.0);
        assert_eq!(camera.field_of_view(), 45.0);

        for delta in [3.0, -7.5, 0.25, -60.0, 59.0] {
            camera.zoom(delta);
            let fov = camera.field_of_view();
            assert!((1.0..=45.0).contains(&fov), "fov {fov} out of range");
        }
    }

    #[test]
    fn zero_elapsed_time_does_not_move() {
        let mut camera = test_camera();
        let start = camera.position;
        for direction in MoveDirection::ALL {
            camera.translate(direction, 0.0);
            assert_eq!(camera.position, start);
        }
    }

    #[test]
    fn forward_then_backward_round_trips() {
        let mut camera = test_camera();
        camera.rotate(Vec2::new(33.0, 21.0), true);
        let start = camera.position;
        camera.translate(MoveDirection::Forward, 0.25);
        camera.translate(MoveDirection::Backward, 0.25);
        assert_vec3_near(camera.position, start);
    }

    #[test]
    fn movement_speed_scales_distance() {
        let mut camera = test_camera();
        camera.movement_speed = 10.0;
        let start = camera.position;
        camera.translate(MoveDirection::Forward, 0.5);
        let travelled = camera.position - start;
        assert_vec3_near(travelled, camera.forward() * 5.0);
    }

    #[test]
    fn strafe_axis_is_horizontal_at_level_pitch() {
        let mut camera = test_camera();
        camera.rotate(Vec2::new(123.0, 0.0), true);
        let start = camera.position;
        camera.translate(MoveDirection::Right, 1.0);
        let travelled = camera.position - start;
        assert!(travelled.y.abs() < EPS);
        assert!((travelled.length() - camera.movement_speed).abs() < 1e-3);
    }

    #[test]
    fn view_matrix_centers_the_eye() {
        let mut camera = test_camera();
        camera.position = Vec3::new(4.0, -2.0, 7.5);
        camera.rotate(Vec2::new(210.0, -80.0), true);
        let view = camera.view_matrix();

        let eye = view * camera.position.extend(1.0);
        assert!(eye.truncate().length() < 1e-4);

        let target = view * (camera.position + camera.forward()).extend(1.0);
        assert!((target - Vec4::new(0.0, 0.0, -1.0, 1.0)).length() < 1e-4);
    }
}

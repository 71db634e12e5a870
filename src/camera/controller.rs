use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform, MoveDirection};
use crate::gpu::render_context::RenderContext;
use crate::input::InputState;
use crate::options::CameraOptions;

/// Owns the [`Camera`] together with its GPU uniform buffer and bind
/// group.
///
/// Each frame the demo drains the accumulated [`InputState`] through
/// [`update`](Self::update) and then writes the uniform with
/// [`update_gpu`](Self::update_gpu).
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    /// CPU copy of the uniform contents.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in the demo shaders).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the uniform buffer.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the camera and its GPU resources.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let aspect =
            context.config.width as f32 / context.config.height as f32;
        let camera = Camera::new(options, aspect);

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group = context.device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            },
        );

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Drain the frame's accumulated input into camera state.
    ///
    /// Held move keys translate scaled by `dt`; pointer and scroll deltas
    /// are taken (and reset) from the input state.
    pub fn update(&mut self, input: &mut InputState, dt: f32) {
        for direction in MoveDirection::ALL {
            if input.is_held(direction) {
                self.camera.translate(direction, dt);
            }
        }

        let look = input.take_look_delta();
        if look != glam::Vec2::ZERO {
            self.camera.rotate(look, true);
        }

        let zoom = input.take_zoom_delta();
        if zoom != 0.0 {
            self.camera.zoom(zoom);
        }
    }

    /// Write the current camera state into the GPU uniform buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Update the aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }
}

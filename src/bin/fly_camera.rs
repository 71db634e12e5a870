//! Ten textured cubes and a first-person fly camera.
//!
//! WASD moves, the mouse looks, and the scroll wheel zooms the field of
//! view. Window events feed an [`InputState`] that the camera controller
//! drains once per frame; the cubes are drawn with a per-instance model
//! matrix buffer.

use std::path::Path;
use std::sync::Arc;

use glint::camera::CameraController;
use glint::gpu::{bindings, DepthTexture, RenderContext, ShaderSource, Texture};
use glint::mesh::{cube_model_matrix, TexturedVertex, CUBE_OFFSETS, CUBE_VERTICES};
use glint::options::Options;
use glint::util::FrameTiming;
use glint::{GlintError, InputState};
use wgpu::util::DeviceExt;
use winit::application::ApplicationHandler;
use winit::event::{
    DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent,
};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

const OPTIONS_PATH: &str = "glint.toml";

/// Interval between FPS log lines, in frames.
const FPS_LOG_INTERVAL: u32 = 600;

fn load_options() -> Options {
    let path = Path::new(OPTIONS_PATH);
    if !path.exists() {
        return Options::default();
    }
    match Options::load(path) {
        Ok(options) => options,
        Err(e) => {
            log::error!("failed to load {OPTIONS_PATH}: {e}");
            Options::default()
        }
    }
}

/// Load a texture file, substituting the checkerboard on failure.
fn load_texture(
    context: &RenderContext,
    path: &str,
    flip_vertically: bool,
) -> Texture {
    match Texture::from_path(
        &context.device,
        &context.queue,
        Path::new(path),
        flip_vertically,
    ) {
        Ok(texture) => texture,
        Err(e) => {
            log::error!("failed to load texture {path}: {e}");
            Texture::checkerboard(&context.device, &context.queue)
        }
    }
}

/// Per-instance model matrix, split into four vec4 attributes.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct RawInstance {
    model: [[f32; 4]; 4],
}

impl RawInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

struct Demo {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    depth: DepthTexture,
    texture_bind_group: wgpu::BindGroup,
    controller: CameraController,
}

impl Demo {
    async fn new(
        window: Arc<Window>,
        size: (u32, u32),
        options: &Options,
    ) -> Result<Self, GlintError> {
        let context = RenderContext::new(window, size).await?;

        let shader = ShaderSource::from_wgsl(
            "fly_camera",
            include_str!("../../assets/shaders/fly_camera.wgsl"),
        )?;
        let module = shader.create_module(&context.device);

        let container =
            load_texture(&context, "assets/textures/container.jpg", false);
        let face =
            load_texture(&context, "assets/textures/awesomeface.png", true);

        let texture_layout = bindings::dual_texture_layout(&context.device);
        let texture_bind_group = bindings::dual_texture_bind_group(
            &context.device,
            &texture_layout,
            &container,
            &face,
        );

        let controller = CameraController::new(&context, &options.camera);

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&CUBE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let instances: Vec<RawInstance> = (0..CUBE_OFFSETS.len())
            .map(|i| RawInstance {
                model: cube_model_matrix(i).to_cols_array_2d(),
            })
            .collect();
        let instance_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Cube Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        let depth =
            DepthTexture::new(&context.device, size.0.max(1), size.1.max(1));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Cube Pipeline Layout"),
                bind_group_layouts: &[&controller.layout, &texture_layout],
                push_constant_ranges: &[],
            },
        );
        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Cube Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    buffers: &[
                        TexturedVertex::layout(),
                        RawInstance::layout(),
                    ],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &module,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthTexture::FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Ok(Self {
            context,
            pipeline,
            vertex_buffer,
            instance_buffer,
            depth,
            texture_bind_group,
            controller,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
        self.controller.resize(width, height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Cube Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: 0.2,
                                    g: 0.3,
                                    b: 0.3,
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.controller.bind_group, &[]);
            pass.set_bind_group(1, &self.texture_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            pass.draw(
                0..CUBE_VERTICES.len() as u32,
                0..CUBE_OFFSETS.len() as u32,
            );
        }
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

struct App {
    window: Option<Arc<Window>>,
    demo: Option<Demo>,
    options: Options,
    input: InputState,
    timing: FrameTiming,
    frame_count: u32,
}

impl App {
    /// Lock (or at least confine) and hide the cursor for mouse look.
    fn grab_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("glint: fly camera")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        Self::grab_cursor(&window);

        let size = window.inner_size();
        let demo = match pollster::block_on(Demo::new(
            window.clone(),
            (size.width, size.height),
            &self.options,
        )) {
            Ok(demo) => demo,
            Err(e) => {
                log::error!("initialization failed: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.demo = Some(demo);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                let key_str = format!("{code:?}");
                if let Some(direction) =
                    self.options.bindings.lookup(&key_str)
                {
                    let pressed = event.state == ElementState::Pressed;
                    self.input.set_held(direction, pressed);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.input.scrolled(y),
                MouseScrollDelta::PixelDelta(pos) => {
                    self.input.scrolled(pos.y as f32 * 0.01);
                }
            },

            WindowEvent::Resized(size) => {
                if let Some(demo) = &mut self.demo {
                    demo.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(demo)) =
                    (&self.window, &mut self.demo)
                {
                    let dt = self.timing.tick();
                    demo.controller.update(&mut self.input, dt);
                    demo.controller.update_gpu(&demo.context.queue);

                    match demo.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Lost
                            | wgpu::SurfaceError::Outdated,
                        ) => {
                            let inner = window.inner_size();
                            demo.resize(inner.width, inner.height);
                        }
                        Err(e) => log::error!("render error: {e:?}"),
                    }

                    self.frame_count = self.frame_count.wrapping_add(1);
                    if self.frame_count % FPS_LOG_INTERVAL == 0 {
                        log::debug!("{:.1} fps", self.timing.fps());
                    }
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }

    /// Mouse look reads raw device motion: with the cursor grabbed, the
    /// cursor *position* is pinned (or frozen outright under a locked
    /// grab), so `CursorMoved` cannot carry unbounded look deltas.
    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.look(dx as f32, dy as f32);
        }
    }
}

fn run() -> Result<(), GlintError> {
    let mut app = App {
        window: None,
        demo: None,
        options: load_options(),
        input: InputState::new(),
        timing: FrameTiming::new(),
        frame_count: 0,
    };

    let event_loop = EventLoop::new()
        .map_err(|e| GlintError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run_app(&mut app)
        .map_err(|e| GlintError::EventLoop(e.to_string()))
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

//! Textured quad transformed by model/view/projection matrices.
//!
//! Port of the classic coordinate-systems tutorial: a unit quad tilted
//! -55° about X, viewed from three units back, under a 45° perspective
//! projection. The pipeline and uniforms are assembled inline.

use std::path::Path;
use std::sync::Arc;

use glam::{Mat4, Vec3};
use glint::gpu::{bindings, RenderContext, ShaderSource, Texture};
use glint::mesh::{TexturedVertex, QUAD_INDICES, QUAD_VERTICES};
use glint::options::Options;
use glint::GlintError;
use wgpu::util::DeviceExt;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const OPTIONS_PATH: &str = "glint.toml";

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

struct Demo {
    context: RenderContext,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    transform_buffer: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,
    texture_bind_group: wgpu::BindGroup,
}

impl Demo {
    async fn new(
        window: Arc<Window>,
        size: (u32, u32),
    ) -> Result<Self, GlintError> {
        let context = RenderContext::new(window, size).await?;

        let shader = ShaderSource::from_wgsl(
            "coordinate_systems",
            include_str!("../../assets/shaders/coordinate_systems.wgsl"),
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

        let transform_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Transform Buffer"),
                contents: bytemuck::cast_slice(
                    &Self::mvp(size.0, size.1).to_cols_array(),
                ),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let transform_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Transform Bind Group Layout"),
                entries: &[bindings::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX,
                )],
            },
        );
        let transform_bind_group = context.device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                label: Some("Transform Bind Group"),
                layout: &transform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: transform_buffer.as_entire_binding(),
                }],
            },
        );

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Quad Vertex Buffer"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Quad Index Buffer"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Quad Pipeline Layout"),
                bind_group_layouts: &[&transform_layout, &texture_layout],
                push_constant_ranges: &[],
            },
        );
        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Quad Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &module,
                    entry_point: Some("vs_main"),
                    buffers: &[TexturedVertex::layout()],
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
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Ok(Self {
            context,
            pipeline,
            vertex_buffer,
            index_buffer,
            transform_buffer,
            transform_bind_group,
            texture_bind_group,
        })
    }

    /// Model tilted -55° about X, camera three units back, 45°
    /// perspective.
    fn mvp(width: u32, height: u32) -> Mat4 {
        let model = Mat4::from_rotation_x((-55.0_f32).to_radians());
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        let projection = Mat4::perspective_rh(
            45.0_f32.to_radians(),
            width as f32 / height.max(1) as f32,
            0.1,
            100.0,
        );
        projection * view * model
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.context.queue.write_buffer(
            &self.transform_buffer,
            0,
            bytemuck::cast_slice(&Self::mvp(width, height).to_cols_array()),
        );
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
                    label: Some("Quad Pass"),
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
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.transform_bind_group, &[]);
            pass.set_bind_group(1, &self.texture_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(
                self.index_buffer.slice(..),
                wgpu::IndexFormat::Uint16,
            );
            pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
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
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("glint: coordinate systems")
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

        let size = window.inner_size();
        let demo = match pollster::block_on(Demo::new(
            window.clone(),
            (size.width, size.height),
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
                if event.physical_key
                    == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(demo) = &mut self.demo {
                    demo.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(demo)) =
                    (&self.window, &mut self.demo)
                {
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
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }
}

fn run() -> Result<(), GlintError> {
    let mut app = App {
        window: None,
        demo: None,
        options: load_options(),
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

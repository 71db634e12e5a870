use std::fmt;

/// A GPU bring-up step that refused.
///
/// Variants follow the initialization order: surface, adapter, device,
/// surface configuration.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not back a wgpu surface.
    Surface(wgpu::CreateSurfaceError),
    /// Every available adapter declined the surface.
    NoAdapter(wgpu::RequestAdapterError),
    /// The adapter rejected the device request.
    Device(wgpu::RequestDeviceError),
    /// The adapter reports no usable configuration for the surface.
    Unconfigurable,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => {
                write!(f, "cannot create a rendering surface: {e}")
            }
            Self::NoAdapter(e) => {
                write!(f, "no GPU adapter accepted the surface: {e}")
            }
            Self::Device(e) => {
                write!(f, "the adapter refused the device request: {e}")
            }
            Self::Unconfigurable => {
                write!(f, "no supported surface configuration")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::NoAdapter(e) => Some(e),
            Self::Device(e) => Some(e),
            Self::Unconfigurable => None,
        }
    }
}

/// The wgpu state every demo shares: logical device, command queue, and
/// the window surface with its current configuration.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    /// The window surface frames are presented to.
    pub surface: wgpu::Surface<'static>,
    /// Active surface configuration (format, size, present mode).
    pub config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Bring up wgpu for the given window: surface, adapter, logical
    /// device, and an initial surface configuration at `initial_size`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] naming whichever bring-up step
    /// refused.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::Surface)?;

        let (device, queue, config) =
            Self::open_device(&instance, &surface, initial_size).await?;
        surface.configure(&device, &config);

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Pick an adapter that can present to `surface` and open a device
    /// on it, along with the surface configuration the demos render
    /// through.
    async fn open_device(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
        (width, height): (u32, u32),
    ) -> Result<
        (wgpu::Device, wgpu::Queue, wgpu::SurfaceConfiguration),
        RenderContextError,
    > {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(surface),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::NoAdapter)?;

        // Default features and limits are plenty for textured triangles.
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("glint device"),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::Device)?;

        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(RenderContextError::Unconfigurable)?;
        // Vsync; the demos render on redraw rather than racing the
        // compositor.
        config.present_mode = wgpu::PresentMode::Fifo;

        Ok((device, queue, config))
    }

    /// The surface texture format.
    #[must_use]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Match the surface to a new window size. Zero-sized updates
    /// (minimized windows) are skipped.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// The next swapchain texture to draw into.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the surface is lost,
    /// outdated, or times out; the caller reconfigures and retries.
    pub fn get_next_frame(
        &self,
    ) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// A fresh command encoder for this frame's passes.
    #[must_use]
    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            },
        )
    }

    /// Finish `encoder` and hand its commands to the queue.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::RenderContextError;

    #[test]
    fn error_messages_name_the_failing_step() {
        let msg = RenderContextError::Unconfigurable.to_string();
        assert!(msg.contains("surface configuration"));
    }
}

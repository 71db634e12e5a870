//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, WGSL shader loading with
//! naga validation, texture decoding and upload, and shared bind-group
//! layout helpers.

/// Shared wgpu bind-group layout boilerplate.
pub mod bindings;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL loading, parsing, and validation via naga.
pub mod shader;
/// Image decoding, GPU upload, and the depth attachment.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use shader::{ShaderError, ShaderSource};
pub use texture::{DepthTexture, Texture, TextureError};
